//! Contact section.
//!
//! The form is presentational: it has no action and `site.js` cancels its
//! submit event.

use askama::Template;

use crate::content::{ContactChannel, SiteContent};
use crate::ui::components::{Button, ButtonSize, ButtonVariant, SectionHeading, TextArea, TextInput};

#[derive(Template, Debug, Clone)]
#[template(path = "sections/contact_form.html")]
pub struct ContactForm {
    name: TextInput<'static>,
    email: TextInput<'static>,
    message: TextArea<'static>,
    submit: Button<'static>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: TextInput {
                input_type: "text",
                name: "name",
                placeholder: "Tu nombre",
            },
            email: TextInput {
                input_type: "email",
                name: "email",
                placeholder: "Tu email",
            },
            message: TextArea {
                name: "message",
                placeholder: "Tu mensaje",
                rows: 4,
            },
            submit: Button::new(
                ButtonVariant::Primary,
                ButtonSize::Block,
                "submit",
                "Enviar mensaje",
            ),
        }
    }
}

#[derive(Template, Debug, Clone)]
#[template(path = "sections/contact.html")]
pub struct ContactSection<'a> {
    heading: SectionHeading<'static>,
    channels: &'a [ContactChannel],
    form: ContactForm,
}

impl<'a> ContactSection<'a> {
    pub fn new(content: &'a SiteContent) -> Self {
        Self {
            heading: SectionHeading {
                title: "¿Listo para transformar tu negocio?",
                subtitle: "Contáctanos hoy y descubre cómo podemos ayudarte a alcanzar tus objetivos",
            },
            channels: content.contact_channels,
            form: ContactForm::default(),
        }
    }
}
