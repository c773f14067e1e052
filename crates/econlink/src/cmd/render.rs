use std::fs;
use std::io::Read;

use econlink_link::{gen_command, ItemPreviewDescriptor, LinkBuilder, LinkConfig};
use econlink_proto::ProtoEncoder;

use crate::cmd::{DescriptorArgs, LinkArgs};
use crate::exit::{io_error, link_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_render, OutputFormat, RenderKind};

pub fn run_link(args: LinkArgs, format: OutputFormat) -> CliResult<i32> {
    let descriptor = resolve_descriptor(&args.input)?;
    let link = render_link(&descriptor, args.prefix)?;
    emit(RenderKind::Link, &link, format)
}

pub fn run_hex(args: DescriptorArgs, format: OutputFormat) -> CliResult<i32> {
    let descriptor = resolve_descriptor(&args)?;
    let hex = LinkBuilder::new()
        .hex(&descriptor)
        .map_err(|err| link_error("encode failed", err))?;
    emit(RenderKind::Hex, &hex, format)
}

pub fn run_gen(args: DescriptorArgs, format: OutputFormat) -> CliResult<i32> {
    let descriptor = resolve_descriptor(&args)?;
    emit(RenderKind::Gen, &gen_command(&descriptor), format)
}

fn emit(kind: RenderKind, value: &str, format: OutputFormat) -> CliResult<i32> {
    tracing::debug!(kind = kind.as_str(), length = value.len(), "rendered descriptor");
    print_render(kind, value, format);
    Ok(SUCCESS)
}

fn render_link(descriptor: &ItemPreviewDescriptor, prefix: Option<String>) -> CliResult<String> {
    let config = match prefix {
        Some(uri_prefix) => LinkConfig { uri_prefix },
        None => LinkConfig::default(),
    };
    LinkBuilder::with_config(ProtoEncoder::new(), config)
        .link(descriptor)
        .map_err(|err| link_error("encode failed", err))
}

fn resolve_descriptor(args: &DescriptorArgs) -> CliResult<ItemPreviewDescriptor> {
    let descriptor = if let Some(json) = &args.json {
        serde_json::from_str(json).map_err(|err| {
            CliError::new(USAGE, format!("--json is not a valid descriptor: {err}"))
        })?
    } else {
        let text = match &args.file {
            Some(path) => fs::read_to_string(path).map_err(|err| {
                io_error(&format!("failed reading {}", path.display()), err)
            })?,
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|err| io_error("failed reading stdin", err))?;
                text
            }
        };
        parse_descriptor(&text)?
    };
    Ok(apply_legacy_sentinel(descriptor, args.legacy_sentinel))
}

fn parse_descriptor(text: &str) -> CliResult<ItemPreviewDescriptor> {
    serde_json::from_str(text)
        .map_err(|err| CliError::new(DATA_INVALID, format!("invalid descriptor: {err}")))
}

fn apply_legacy_sentinel(
    descriptor: ItemPreviewDescriptor,
    legacy_sentinel: bool,
) -> ItemPreviewDescriptor {
    match descriptor.paint_wear {
        Some(wear) if legacy_sentinel => descriptor.with_raw_wear(wear),
        _ => descriptor,
    }
}

#[cfg(test)]
mod tests {
    use econlink_link::WEAR_UNSET_SENTINEL;

    use super::*;

    fn args(json: &str) -> DescriptorArgs {
        DescriptorArgs {
            json: Some(json.to_string()),
            ..DescriptorArgs::default()
        }
    }

    #[test]
    fn inline_json_descriptor() {
        let desc = resolve_descriptor(&args(
            r#"{"defindex":7,"paintindex":474,"paintseed":306,"rarity":"covert"}"#,
        ))
        .unwrap();
        assert_eq!(desc.def_index, 7);
        assert_eq!(desc.paint_wear, None);
    }

    #[test]
    fn invalid_inline_json_is_usage_error() {
        let err = resolve_descriptor(&args("{not json")).unwrap_err();
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn invalid_file_contents_are_data_invalid() {
        let err = parse_descriptor(r#"{"def_index":"seven"}"#).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = resolve_descriptor(&DescriptorArgs {
            file: Some("/nonexistent/econlink/item.json".into()),
            ..DescriptorArgs::default()
        })
        .unwrap_err();
        assert!(err.message.contains("/nonexistent/econlink/item.json"));
    }

    #[test]
    fn legacy_sentinel_only_when_requested() {
        let json = r#"{"def_index":1,"paint_index":2,"paint_seed":3,"paint_wear":0.001}"#;
        let strict = resolve_descriptor(&args(json)).unwrap();
        assert_eq!(strict.paint_wear, Some(WEAR_UNSET_SENTINEL));

        let legacy = resolve_descriptor(&DescriptorArgs {
            legacy_sentinel: true,
            ..args(json)
        })
        .unwrap();
        assert_eq!(legacy.paint_wear, None);
    }

    #[test]
    fn custom_prefix_link() {
        let desc = ItemPreviewDescriptor::new(7, 474, 306)
            .with_rarity(econlink_link::Rarity::Covert);
        let link = render_link(&desc, Some("x:".to_string())).unwrap();
        assert_eq!(link, "x:00180720DA03280640B2026A80AE37");
    }
}
