//! Static service and tutor catalogs.
//!
//! Bookings copy titles and tutor names at creation time, so editing these
//! lists never rewrites history.

use crate::error::BookingError;
use crate::models::{Service, Tutor};

/// Title stamped on psychological support bookings.
pub const PSYCHOLOGICAL_SERVICE_TITLE: &str = "Sesión de Apoyo Psicológico";

/// Psychological sessions are free of charge.
pub const PSYCHOLOGICAL_SERVICE_PRICE: u64 = 0;

fn service(title: &str, description: &str, icon: &str, price: u64) -> Service {
    Service {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        price,
    }
}

/// The four support services listed on the support page.
pub fn support_services() -> Vec<Service> {
    vec![
        service(
            "Creación de Carteleras",
            "Te ayudamos a diseñar carteleras creativas y efectivas para tus proyectos escolares.",
            "presentation-chart-bar",
            10000,
        ),
        service(
            "Preparación de Exposiciones",
            "Asesoría para estructurar tus presentaciones, mejorar tus habilidades de oratoria y crear apoyos visuales impactantes.",
            "academic-cap",
            5000,
        ),
        service(
            "Asistencia con Tareas",
            "Apoyo en la resolución de dudas y en la organización de tus tareas para cumplir con todas tus entregas.",
            "document-text",
            3500,
        ),
        service(
            "Elaboración de Maquetas",
            "Guía y soporte en la construcción de maquetas y modelos para proyectos de ciencias, arte y más.",
            "beaker",
            15000,
        ),
    ]
}

/// Peer tutoring, offered separately below the support services.
pub fn tutoring_service() -> Service {
    service(
        "Tutoría entre Compañeros",
        "Conecta con estudiantes avanzados para recibir ayuda en materias específicas. Refuerza conocimientos y desarrolla nuevas habilidades.",
        "users",
        7500,
    )
}

pub fn tutors() -> Vec<Tutor> {
    [
        (1, "Valentina Acevedo", "Ciencias Exactas"),
        (2, "Cristian Portilla", "Humanidades y Redacción"),
        (3, "Paula Salcedo", "Proyectos y Exposiciones"),
        (4, "Jhojan Valdivieso", "Programación y Tecnología"),
    ]
    .into_iter()
    .map(|(id, name, specialty)| Tutor {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
    })
    .collect()
}

/// Every service bookable through the academic flow.
pub fn academic_services() -> Vec<Service> {
    let mut services = support_services();
    services.push(tutoring_service());
    services
}

pub fn find_service(title: &str) -> Result<Service, BookingError> {
    academic_services()
        .into_iter()
        .find(|s| s.title == title)
        .ok_or_else(|| BookingError::UnknownService(title.to_string()))
}

pub fn find_tutor(id: u32) -> Result<Tutor, BookingError> {
    tutors()
        .into_iter()
        .find(|t| t.id == id)
        .ok_or(BookingError::UnknownTutor(id))
}

/// Support page controller: picking a service opens the academic flow for it.
#[derive(Debug, Clone)]
pub struct SupportCatalog {
    services: Vec<Service>,
    tutoring: Service,
}

impl Default for SupportCatalog {
    fn default() -> Self {
        Self {
            services: support_services(),
            tutoring: tutoring_service(),
        }
    }
}

impl SupportCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn tutoring(&self) -> &Service {
        &self.tutoring
    }

    /// Resolves the service the user clicked, by title.
    pub fn select(&self, title: &str) -> Result<Service, BookingError> {
        self.services
            .iter()
            .chain(std::iter::once(&self.tutoring))
            .find(|s| s.title == title)
            .cloned()
            .ok_or_else(|| BookingError::UnknownService(title.to_string()))
    }
}
