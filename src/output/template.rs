// src/output/template.rs — Message templating (minijinja)
//
// Templates see `name` (the giver), `assignment` (the rendered text block)
// and `assignments` (a list of `{category, receiver}` maps).

use minijinja::{context, Environment, Value};

use super::render;
use crate::core::types::Giver;
use crate::infra::errors::SantaError;

const PLAIN_NAME: &str = "message.txt";
const HTML_NAME: &str = "message.html";

pub struct MessageTemplates {
    plain: String,
    html: Option<String>,
}

impl MessageTemplates {
    /// Check and keep the plain-text template and, if given, the HTML one.
    /// HTML output is auto-escaped.
    pub fn new(plain: &str, html: Option<&str>) -> Result<Self, SantaError> {
        let env = Environment::new();
        env.template_from_named_str(PLAIN_NAME, plain)?;
        if let Some(html) = html {
            env.template_from_named_str(HTML_NAME, html)?;
        }
        Ok(Self {
            plain: plain.to_string(),
            html: html.map(String::from),
        })
    }

    pub fn has_html(&self) -> bool {
        self.html.is_some()
    }

    fn context_for(giver: &Giver) -> Value {
        let assignments: Vec<Value> = giver
            .assignments()
            .iter()
            .map(|(category, receiver)| {
                context! { category => category.to_string(), receiver => *receiver }
            })
            .collect();
        context! {
            name => giver.name(),
            assignment => render::render_giver(giver),
            assignments => assignments,
        }
    }

    pub fn render_plain(&self, giver: &Giver) -> Result<String, SantaError> {
        let env = Environment::new();
        let template = env.template_from_named_str(PLAIN_NAME, &self.plain)?;
        Ok(template.render(Self::context_for(giver))?)
    }

    pub fn render_html(&self, giver: &Giver) -> Result<Option<String>, SantaError> {
        let Some(html) = self.html.as_deref() else {
            return Ok(None);
        };
        let env = Environment::new();
        let template = env.template_from_named_str(HTML_NAME, html)?;
        Ok(Some(template.render(Self::context_for(giver))?))
    }
}
