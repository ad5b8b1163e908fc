//! Interactive tour shown from the home page.

use serde::Serialize;

use crate::error::BookingError;
use crate::models::Page;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TourStep {
    pub index: usize,
    pub title: &'static str,
    pub scenario: &'static str,
    pub options: &'static [&'static str],
    pub feedback: &'static str,
    pub next_step: Option<usize>,
    /// Page opened by choosing the first option.
    pub action: Option<Page>,
    pub icon: &'static str,
}

static STEPS: [TourStep; 4] = [
    TourStep {
        index: 0,
        title: "¡Bienvenido al Tour Interactivo!",
        scenario: "Imagina que tienes un examen importante mañana y te sientes abrumado por el estrés. ¿Qué haces?",
        options: &[
            "Intento estudiar, pero no me concentro.",
            "Busco ayuda para manejar la ansiedad.",
        ],
        feedback: "Es normal sentirse así. Reconocer que necesitas ayuda es el primer paso. Nuestra plataforma está aquí para eso.",
        next_step: Some(1),
        action: None,
        icon: "brain",
    },
    TourStep {
        index: 1,
        title: "Apoyo a tu Medida",
        scenario: "¡Exacto! Ofrecemos apoyo psicológico confidencial. Podrías hablar con un profesional que te dará herramientas para manejar el estrés.",
        options: &["Explorar apoyo psicológico", "Ver otro escenario"],
        feedback: "¡Excelente elección! Cuidar tu salud mental es clave para el éxito académico.",
        next_step: Some(2),
        action: Some(Page::Booking),
        icon: "brain",
    },
    TourStep {
        index: 2,
        title: "Reto Académico",
        scenario: "Ahora, imagina que tienes que hacer una exposición sobre un tema que no entiendes muy bien. ¿Cuál es tu plan?",
        options: &[
            "Me frustro y lo dejo para última hora.",
            "Busco a alguien que me lo explique.",
        ],
        feedback: "¡Pedir ayuda es de inteligentes! No tienes que enfrentarte a los retos académicos solo.",
        next_step: Some(3),
        action: None,
        icon: "academic-cap",
    },
    TourStep {
        index: 3,
        title: "Conectando Conocimiento",
        scenario: "Nuestra sección de Acompañamiento Académico te conecta con tutores y te da recursos para tus tareas y exposiciones.",
        options: &["Ver apoyo académico", "Finalizar tour"],
        feedback: "¡Genial! Invertir en tu aprendizaje siempre es una buena idea.",
        next_step: None,
        action: Some(Page::Support),
        icon: "academic-cap",
    },
];

/// Result of choosing a tour option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourOutcome {
    /// Show this step next.
    Advance(usize),
    /// Close the tour and open this page.
    Navigate(Page),
    /// Close the tour.
    Finished,
}

pub fn tour_step(index: usize) -> Result<&'static TourStep, BookingError> {
    STEPS.get(index).ok_or(BookingError::UnknownTourStep(index))
}

pub fn tour_len() -> usize {
    STEPS.len()
}

/// Home tour controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomeTour {
    current: usize,
}

impl HomeTour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &'static TourStep {
        &STEPS[self.current.min(STEPS.len() - 1)]
    }

    /// Choosing option 0 on a step with an action navigates there; any other
    /// choice advances, finishing after the last step. Options the step does
    /// not offer are rejected and leave the tour where it was.
    pub fn choose(&mut self, option: usize) -> Result<TourOutcome, BookingError> {
        let step = self.current();
        if option >= step.options.len() {
            return Err(BookingError::UnknownTourOption {
                step: step.index,
                option,
            });
        }
        if let (Some(page), 0) = (step.action, option) {
            self.current = 0;
            return Ok(TourOutcome::Navigate(page));
        }
        let outcome = match step.next_step {
            Some(next) => {
                self.current = next;
                TourOutcome::Advance(next)
            }
            None => {
                self.current = 0;
                TourOutcome::Finished
            }
        };
        Ok(outcome)
    }

    /// Closing the modal restarts the tour.
    pub fn close(&mut self) {
        self.current = 0;
    }
}

/// Stateless form of [`HomeTour::choose`] for the HTTP surface.
pub fn choose_option(step: usize, option: usize) -> Result<TourOutcome, BookingError> {
    tour_step(step)?;
    let mut tour = HomeTour { current: step };
    tour.choose(option)
}
