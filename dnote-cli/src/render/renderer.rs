use super::theme::OneDark;
use chrono::{DateTime, FixedOffset};
use dnote_core::{FIELDS, FieldKind, Settings};
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// A short confirmation, the CLI's equivalent of a toast.
    pub fn print_notice(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(OneDark::GREEN).attribute(Attribute::Bold));
        } else {
            println!("{message}");
        }
    }

    pub fn print_path_line(&self, label: &str, path: &str) {
        if self.opts.use_color {
            let label = format!("{label:<10}");
            println!("{} {}", label.with(OneDark::CYAN), path.with(OneDark::YELLOW));
        } else {
            println!("{label:<10} {path}");
        }
    }

    /// The settings panel: one row per field with its current value and key.
    pub fn print_settings(&self, settings: &Settings, moment: &DateTime<FixedOffset>) {
        let mut rows = Vec::new();
        for field in FIELDS.iter() {
            let mut value = (field.get)(settings).to_string();
            if value.is_empty() {
                value = "(empty)".to_string();
            }
            if let Some(preview) = field.preview(settings, moment) {
                value = format!("{value} -> {preview}");
            }
            rows.push((field.name, field.description, value, field.key.as_ref(), field.kind));
        }

        if self.opts.use_color {
            let mut md = String::from("|:-|:-|:-|\n|**Setting**|**Value**|**Key**|\n|-|-|-|\n");
            for (name, description, value, key, _) in &rows {
                md.push_str(&format!(
                    "|**{name}** *{description}*|{}|`{key}`|\n",
                    escape_cell(value)
                ));
            }
            md.push_str("|-|-|-|\n");
            self.skin.print_text(&md);
        } else {
            for (name, description, value, key, kind) in &rows {
                let hint = match kind {
                    FieldKind::Toggle => " (on/off)",
                    _ => "",
                };
                println!("{name} [{key}]{hint}: {value}");
                println!("    {description}");
            }
        }
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "¦")
}
