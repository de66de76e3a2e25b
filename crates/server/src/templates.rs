use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

/// Page templates compiled into the binary
const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("response.html", include_str!("../templates/response.html")),
    ("add_course.html", include_str!("../templates/add_course.html")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env })
    }

    /// Render a named page with the given context
    pub fn render<S: Serialize>(
        &self,
        name: &str,
        context: S,
    ) -> Result<Html<String>, minijinja::Error> {
        let template = self.env.get_template(name)?;
        template.render(context).map(Html)
    }
}
