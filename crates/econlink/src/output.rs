use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Raw
        }
    }
}

/// Which rendering of the descriptor was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    Link,
    Hex,
    Gen,
}

impl RenderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderKind::Link => "link",
            RenderKind::Hex => "hex",
            RenderKind::Gen => "gen",
        }
    }
}

#[derive(Serialize)]
struct RenderOutput<'a> {
    schema_id: &'a str,
    kind: RenderKind,
    value: &'a str,
    length: usize,
}

pub fn render_json(kind: RenderKind, value: &str) -> String {
    let out = RenderOutput {
        schema_id: "https://schemas.3leaps.dev/econlink/cli/v1/render.schema.json",
        kind,
        value,
        length: value.len(),
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn print_render(kind: RenderKind, value: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", render_json(kind, value)),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["KIND", "LENGTH", "VALUE"])
                .add_row(vec![
                    kind.as_str().to_string(),
                    value.len().to_string(),
                    value.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("{}={}", kind.as_str(), value),
        OutputFormat::Raw => println!("{value}"),
    }
}
