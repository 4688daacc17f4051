//! Literal page content.
//!
//! Everything the landing page displays lives here as typed data, so the
//! section renderers stay free of copy.

/// Navigation link pointing at an in-page anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Entry of the services grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Customer testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// Highest rating a testimonial can display.
    pub const MAX_RATING: u8 = 5;

    /// Number of stars to draw, clamped to `1..=5`.
    pub fn stars(&self) -> usize {
        usize::from(self.rating.clamp(1, Self::MAX_RATING))
    }
}

/// Accent color used for a stat value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Blue,
    Purple,
    Cyan,
    Green,
    Yellow,
}

impl Accent {
    /// CSS modifier class for this accent.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Purple => "accent-purple",
            Self::Cyan => "accent-cyan",
            Self::Green => "accent-green",
            Self::Yellow => "accent-yellow",
        }
    }
}

/// Headline figure ("500+ Proyectos").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Accent,
}

/// Contact detail shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// All copy displayed on the landing page.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub brand: &'static str,
    pub logo_src: &'static str,
    pub hero_image_src: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub pillars: &'static [&'static str],
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub nav_cta: &'static str,
    pub nav_links: &'static [NavLink],
    pub mobile_nav_links: &'static [NavLink],
    pub hero_stats: &'static [Stat],
    pub services: &'static [Service],
    pub about_paragraphs: &'static [&'static str],
    pub about_stats: &'static [Stat],
    pub testimonials: &'static [Testimonial],
    pub contact_channels: &'static [ContactChannel],
}

const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "#services",
        label: "Servicios",
    },
    NavLink {
        href: "#about",
        label: "Nosotros",
    },
    NavLink {
        href: "#testimonials",
        label: "Testimonios",
    },
    NavLink {
        href: "#contact",
        label: "Contacto",
    },
];

const MOBILE_NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "#services",
        label: "Servicios",
    },
    NavLink {
        href: "#about",
        label: "Sobre Nosotros",
    },
    NavLink {
        href: "#testimonials",
        label: "Testimonios",
    },
    NavLink {
        href: "#contact",
        label: "Contacto",
    },
];

const HERO_STATS: &[Stat] = &[
    Stat {
        value: "500+",
        label: "Proyectos",
        accent: Accent::Blue,
    },
    Stat {
        value: "98%",
        label: "Satisfacción",
        accent: Accent::Purple,
    },
    Stat {
        value: "24/7",
        label: "Soporte",
        accent: Accent::Cyan,
    },
];

const SERVICES: &[Service] = &[
    Service {
        title: "Automatizaciones",
        description: "Optimiza tus procesos con automatizaciones inteligentes que ahorran tiempo y recursos.",
        icon: "🤖",
    },
    Service {
        title: "Desarrollo Web",
        description: "Sitios web modernos y aplicaciones que destacan y convierten visitantes en clientes.",
        icon: "💻",
    },
    Service {
        title: "SEO & Posicionamiento",
        description: "Mejora tu visibilidad online y atrae más clientes con estrategias SEO efectivas.",
        icon: "📈",
    },
    Service {
        title: "Desarrollo a Medida",
        description: "Soluciones personalizadas que se adaptan perfectamente a las necesidades de tu negocio.",
        icon: "⚙️",
    },
    Service {
        title: "Consultoría",
        description: "Asesoramiento experto para tomar las mejores decisiones tecnológicas para tu empresa.",
        icon: "💡",
    },
    Service {
        title: "Soporte 24/7",
        description: "Acompañamiento continuo para garantizar el éxito de tus proyectos tecnológicos.",
        icon: "🛠️",
    },
];

const ABOUT_PARAGRAPHS: &[&str] = &[
    "Somos un equipo de expertos apasionados por la tecnología, dedicados a transformar ideas en soluciones digitales innovadoras que impulsan el crecimiento de tu negocio.",
    "Con años de experiencia en el sector, hemos ayudado a cientos de empresas a automatizar sus procesos, mejorar su presencia online y alcanzar sus objetivos digitales.",
];

const ABOUT_STATS: &[Stat] = &[
    Stat {
        value: "500+",
        label: "Proyectos Completados",
        accent: Accent::Blue,
    },
    Stat {
        value: "98%",
        label: "Satisfacción Cliente",
        accent: Accent::Purple,
    },
    Stat {
        value: "24/7",
        label: "Soporte Técnico",
        accent: Accent::Green,
    },
    Stat {
        value: "5+",
        label: "Años Experiencia",
        accent: Accent::Yellow,
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "María González",
        company: "TechStart SL",
        text: "Increíble trabajo. Automatizaron todos nuestros procesos y ahora somos 3x más eficientes.",
        rating: 5,
    },
    Testimonial {
        name: "Carlos Ruiz",
        company: "Innovate Corp",
        text: "El mejor equipo con el que hemos trabajado. Profesionales, rápidos y con resultados excepcionales.",
        rating: 5,
    },
    Testimonial {
        name: "Ana Martín",
        company: "Digital Plus",
        text: "Nuestro sitio web ahora convierte 5x más. El ROI ha sido impresionante desde el primer mes.",
        rating: 5,
    },
];

const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📧",
        label: "Email",
        value: "contacto@tuempresa.com",
    },
    ContactChannel {
        icon: "📱",
        label: "Teléfono",
        value: "+34 123 456 789",
    },
    ContactChannel {
        icon: "📍",
        label: "Ubicación",
        value: "Madrid, España",
    },
];

impl SiteContent {
    /// Content of the CloudNext landing page.
    pub fn cloudnext() -> Self {
        Self {
            brand: "CloudNext",
            logo_src: "/images/logo.png",
            hero_image_src: "/images/hero_image.png",
            headline: "Automatiza tu negocio en la nube",
            tagline: "Transformamos tu empresa con soluciones tecnológicas innovadoras",
            pillars: &["Desarrollo", "Automatización", "Consultoría"],
            primary_cta: "🚀 Comenzar ahora",
            secondary_cta: "📞 Consulta gratis",
            nav_cta: "Comenzar",
            nav_links: NAV_LINKS,
            mobile_nav_links: MOBILE_NAV_LINKS,
            hero_stats: HERO_STATS,
            services: SERVICES,
            about_paragraphs: ABOUT_PARAGRAPHS,
            about_stats: ABOUT_STATS,
            testimonials: TESTIMONIALS,
            contact_channels: CONTACT_CHANNELS,
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::cloudnext()
    }
}
