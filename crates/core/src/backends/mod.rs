pub mod traits;

// Remote backend implementations
pub mod supabase;
