//! Static copy and media references for the landing page

use crate::types::{AreaGroup, ContactLink, FloatingCard, ServiceCard, SoftwareFeature, TrustBadge};

pub const COMPANY_NAME: &str = "Novamed Ingeniería";
pub const LOGO_WHITE: &str = "/images/Logo%20Blanco.png";
pub const HERO_IMAGE: &str = "/images/Cara Frontal Tarjeta.jpg";

pub const HERO_LEAD: &str = "Acompañamos a nuestros clientes en la optimización y gestión de sus recursos tecnológicos, mediante soluciones técnicas especializadas que garantizan seguridad, cumplimiento normativo y calidad en la prestación de sus servicios.";

pub const TRUST_BADGES: &[TrustBadge] = &[
    TrustBadge { icon: "★", label: "5 estrellas", tone: "tone-gold" },
    TrustBadge { icon: "🔒", label: "100% Seguro", tone: "tone-green" },
    TrustBadge { icon: "✔", label: "Certificado en Calidad", tone: "tone-purple" },
    TrustBadge { icon: "♥", label: "Respaldado por Profesionales", tone: "tone-red" },
];

pub const FLOATING_CARDS: &[FloatingCard] = &[
    FloatingCard {
        icon: "✦",
        title: "Soluciones tecnológicas",
        caption: "Cumplimiento garantizado",
        class: "floating-card floating-card-rose",
    },
    FloatingCard {
        icon: "👥",
        title: "Confianza de nuestros clientes",
        caption: "Tu tranquilidad es nuestra prioridad",
        class: "floating-card floating-card-sky",
    },
];

pub const AREA_GROUPS: &[AreaGroup] = &[
    AreaGroup {
        title: "Servicios clínicos",
        items: &[
            "Consulta externa",
            "Vacunación",
            "Imagenología",
            "Rehabilitación",
            "Odontología",
            "Laboratorio",
        ],
    },
    AreaGroup {
        title: "Instituciones",
        items: &[
            "Hospitales y clínicas",
            "Centros y puestos de salud",
            "Ambulancias",
            "Consultorios",
            "Veterinarias",
            "Centrales de esterilización",
        ],
    },
];

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        title: "Mantenimiento",
        description: "Mantenimiento preventivo, correctivo y predictivo para equipos biomédicos e industriales.",
        image: "/images/Mantenimiento.jpg",
        test_id: "card-service-maintenance",
    },
    ServiceCard {
        title: "Verificación metrológica",
        description: "Servicios de metrología para energía, humedad, frecuencia, saturación de O2 y más.",
        image: "/images/Metrologia.jpg",
        test_id: "card-service-metrology",
    },
    ServiceCard {
        title: "Comercialización",
        description: "Suministro de dispositivos, repuestos y accesorios, y soporte para implementación.",
        image: "/images/Comercializacion.jpg",
        test_id: "card-service-commercialization",
    },
];

pub const SOFTWARE_FEATURES: &[SoftwareFeature] = &[
    SoftwareFeature {
        title: "Gestión Documental",
        description: "Organización y control de documentación técnica de equipos",
    },
    SoftwareFeature {
        title: "Habilitación Resolución 3100",
        description: "Cumplimiento normativo según regulación colombiana",
    },
    SoftwareFeature {
        title: "Trazabilidad",
        description: "Seguimiento completo de procesos y auditorías",
    },
    SoftwareFeature {
        title: "Reportes Automáticos",
        description: "Generación de informes y reportes en tiempo real",
    },
];

pub const SOFTWARE_MODULES: &[&str] = &[
    "Gestión de Documentos",
    "Control de Versiones",
    "Auditoría y Trazabilidad",
    "Reportería Automática",
    "Integraciones Personalizadas",
];

pub const MISSION: &str = "Brindar soluciones integrales de gestión de la tecnología garantizando el correcto funcionamiento, la fiabilidad y la eficiencia de dispositivos médicos y veterinarios, equipos industriales y de refrigeración, a través de servicios técnicos especializados, capacitación, asesoría, comercialización de tecnología y desarrollo de software para gestión integral.";

pub const VISION: &str = "Ser reconocidos en Colombia como empresa líder en la prestación de servicios de gestión integral de tecnología, por la excelencia, la innovación y la generación de valor en cada proyecto, consolidando alianzas estratégicas y ofreciendo soluciones sostenibles que impacten positivamente en la seguridad del paciente y la eficiencia de las instituciones.";

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        icon: "📞",
        label: "Teléfono",
        href: "tel:+573226942370",
        text: "+57 322 694 2370",
    },
    ContactLink {
        icon: "✉️",
        label: "Email",
        href: "mailto:novamedingenieria@gmail.com",
        text: "novamedingenieria@gmail.com",
    },
    ContactLink {
        icon: "💬",
        label: "WhatsApp",
        href: "https://wa.me/573226942370",
        text: "WhatsApp",
    },
    ContactLink {
        icon: "📸",
        label: "Instagram",
        href: "https://instagram.com/novamedingenieria",
        text: "@novamedingenieria",
    },
];
