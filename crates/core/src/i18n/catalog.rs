use std::collections::HashMap;

use super::LocalizedText;

/// The site copy, keyed by `namespace.field`. Both languages are filled in
/// for every key the display components reference.
const CATALOG: &[(&str, &str, &str)] = &[
    // ── Navbar ──────────────────────────────────────────────────────
    ("nav.inicio", "Inicio", "Home"),
    ("nav.servicios", "Servicios", "Services"),
    ("nav.equipo", "Nuestro Equipo", "Our Team"),
    ("nav.contacto", "Contacto", "Contact"),
    ("nav.gestion", "Gestión de Activos", "Asset Management"),
    ("nav.fondos", "Fondos de Pensiones", "Pension Funds"),
    ("nav.carteras", "Carteras Institucionales", "Institutional Portfolios"),
    ("nav.asesoria", "Asesoría Financiera", "Financial Advisory"),
    ("nav.directivos", "Directivos", "Executives"),
    ("nav.analistas", "Analistas", "Analysts"),
    ("nav.carreras", "Carreras", "Careers"),
    // ── Hero ────────────────────────────────────────────────────────
    ("hero.title.1", "Passion", "Passion"),
    ("hero.title.2", "Beyond Money", "Beyond Money"),
    (
        "hero.p1",
        "Fundada en 2014 por un equipo con vasta experiencia en los mercados financieros globales, Cretum se distingue como gestor independiente especializado en activos institucionales.",
        "Founded in 2014 by a team with vast experience in global financial markets, Cretum stands out as an independent manager specializing in institutional assets.",
    ),
    (
        "hero.p2",
        "Nos enfocamos en la gestión de fondos de pensiones gubernamentales, fondos institucionales y carteras de individuos de alto patrimonio en México y Latinoamérica. Buscamos optimizar los rendimientos ajustados al riesgo mediante estrategias diversificadas probadas y un riguroso control de riesgos con enfoque patrimonial.",
        "We focus on managing government pension funds, institutional funds, and portfolios of high-net-worth individuals in Mexico and Latin America. We seek to optimize risk-adjusted returns through proven diversified strategies and rigorous risk management with a wealth-focused approach.",
    ),
    ("hero.cta1", "Nuestros Servicios", "Our Services"),
    ("hero.cta2", "Contáctanos", "Contact Us"),
    // ── Services ────────────────────────────────────────────────────
    (
        "services.intro",
        "ofrece servicios que son las herramientas ideales para alcanzar tus objetivos.",
        "offers services that are the ideal tools to achieve your goals.",
    ),
    // ── GVV modal ───────────────────────────────────────────────────
    (
        "gvv.title",
        "Growth, Value and Volatility (GVV)",
        "Growth, Value and Volatility (GVV)",
    ),
    (
        "gvv.subtitle",
        "Fondo Multiestratégico · Multidivisas · Valuado en USD",
        "Multi-Strategy Fund · Multi-Currency · Valued in USD",
    ),
    (
        "gvv.desc",
        "Fondo que invierte en tres estrategias complementarias para maximizar rendimientos ajustados al riesgo en mercados globales.",
        "Fund that invests in three complementary strategies to maximize risk-adjusted returns in global markets.",
    ),
    ("gvv.growth", "Crecimiento", "Growth"),
    (
        "gvv.growth.desc",
        "Compañías de tecnología de alto crecimiento.",
        "High-growth technology companies.",
    ),
    ("gvv.value", "Valor", "Value"),
    (
        "gvv.value.desc",
        "Compañías que generen valor a largo plazo.",
        "Companies that generate long-term value.",
    ),
    ("gvv.hedge", "Coberturas de Volatilidad", "Volatility Hedging"),
    (
        "gvv.hedge.desc",
        "Reducción de riesgo vía Delta Hedging.",
        "Risk reduction via Delta Hedging.",
    ),
    ("gvv.chart.title", "Valor del Portafolio", "Portfolio Value"),
    ("gvv.chart.label", "Valor", "Value"),
    (
        "gvv.philosophy",
        "Cretum Partners invierte bajo la filosofía de crecimiento e inversión a largo plazo, rodeado de confianza, seguridad y transparencia en un ambiente protegido. Alcanzamos a ver lo que otros no pueden, esa es nuestra ventaja competitiva.",
        "Cretum Partners invests under a philosophy of long-term growth and investment, surrounded by trust, security and transparency in a protected environment. We see what others cannot, that is our competitive advantage.",
    ),
    (
        "gvv.download",
        "Descargar Carta Mensual de GVV",
        "Download GVV Monthly Letter",
    ),
    (
        "gvv.noDoc",
        "Carta Mensual no disponible aún",
        "Monthly Letter not yet available",
    ),
    // ── MVP modal ───────────────────────────────────────────────────
    (
        "mvp.title",
        "Manhattan Venture Partners",
        "Manhattan Venture Partners",
    ),
    ("mvp.subtitle", "Tomorrow's IPOs · Today", "Tomorrow's IPOs · Today"),
    (
        "mvp.desc",
        "Es una firma que invierte en empresas privadas dentro del sector de tecnología. MVP es regulado por FINRA y SEC. La tesis de inversión se enfoca en compañías en etapa PRE-IPO mediante una estrategia secundaria.",
        "A firm that invests in private companies within the technology sector. MVP is regulated by FINRA and SEC. The investment thesis focuses on PRE-IPO stage companies through a secondary strategy.",
    ),
    ("mvp.h1", "Regulado por FINRA y SEC", "Regulated by FINRA and SEC"),
    (
        "mvp.h2",
        "+10 ciudades alrededor del mundo",
        "+10 cities around the world",
    ),
    (
        "mvp.h3",
        "Estrategia Pre-IPO secundaria",
        "Secondary Pre-IPO Strategy",
    ),
    (
        "mvp.h4",
        "Informe mensual: Venture Bytes",
        "Monthly report: Venture Bytes",
    ),
    (
        "mvp.hq",
        "Los headquarters se encuentran en Nueva York y San Francisco; también contamos con presencia en +10 ciudades alrededor del mundo.",
        "Headquarters are located in New York and San Francisco; we also have a presence in +10 cities around the world.",
    ),
    (
        "mvp.analysis",
        "MVP cuenta con un departamento de análisis que reduce la asimetría de mercados privados. A través de su informe mensual, Venture Bytes, se destacan tendencias y oportunidades emergentes en el panorama tecnológico global.",
        "MVP has an analysis department that reduces private market asymmetry. Through its monthly report, Venture Bytes, it highlights trends and emerging opportunities in the global technology landscape.",
    ),
    (
        "mvp.portfolio",
        "Empresas en portafolio — invirtiendo siempre en etapa privada",
        "Portfolio companies — always investing at the private stage",
    ),
    // ── Footer ──────────────────────────────────────────────────────
    (
        "footer.desc",
        "Passion Beyond Money — Gestión independiente de activos institucionales desde 2014.",
        "Passion Beyond Money — Independent institutional asset management since 2014.",
    ),
    ("footer.links", "Enlaces", "Links"),
    ("footer.contact", "Contacto", "Contact"),
    (
        "footer.rights",
        "© 2024 Cretum Partners. Todos los derechos reservados.",
        "© 2024 Cretum Partners. All rights reserved.",
    ),
];

/// Materialize the built-in catalog as a lookup table.
pub(crate) fn builtin_catalog() -> HashMap<String, LocalizedText> {
    CATALOG
        .iter()
        .map(|(key, es, en)| ((*key).to_string(), LocalizedText::new(*es, *en)))
        .collect()
}

/// All keys the built-in catalog defines, in declaration order.
pub(crate) fn builtin_keys() -> Vec<&'static str> {
    CATALOG.iter().map(|(key, _, _)| *key).collect()
}
