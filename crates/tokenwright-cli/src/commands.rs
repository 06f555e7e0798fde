use std::fmt::Write as _;
use std::path::Path;

use tokenwright_core::config::{AppConfig, DesignConfig};
use tokenwright_core::{
    export, fonts, generate_color_scale, generate_design_tokens, ColorScale, Export,
    TokenwrightError,
};

use crate::cli::{Command, GenerateArgs};

pub fn run(command: Command) -> Result<(), TokenwrightError> {
    match command {
        Command::Generate(args) => {
            let exports = generate(&args)?;
            if args.stdout {
                for e in &exports {
                    print!("{}", e.content);
                    if !e.content.ends_with('\n') {
                        println!();
                    }
                }
            }
            Ok(())
        }
        Command::Scale { color } => {
            let scale = generate_color_scale(&color)?;
            print!("{}", format_scale(&scale));
            Ok(())
        }
        Command::Fonts { query } => {
            for font in fonts::search_fonts(query.as_deref().unwrap_or("")) {
                println!("{font}");
            }
            Ok(())
        }
        Command::Init { path, force } => {
            let path = path.unwrap_or_else(AppConfig::config_path);
            init(&path, force)
        }
    }
}

/// Build the bundle and produce every requested export.
///
/// Unless `--stdout` is set the exports are also written to the output
/// directory. Nothing is written if the bundle cannot be built.
pub fn generate(args: &GenerateArgs) -> Result<Vec<Export>, TokenwrightError> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    apply_overrides(args, &mut config.design);

    let token_config = config.design.to_token_config();
    let tokens = generate_design_tokens(&token_config)?;

    let formats = if args.formats.is_empty() {
        config.export.formats.clone()
    } else {
        args.formats.clone()
    };
    let exports = formats
        .into_iter()
        .map(|format| export(format, &token_config, &tokens))
        .collect::<Result<Vec<_>, _>>()?;

    if !args.stdout {
        let dir = args
            .out_dir
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());
        write_exports(&dir, &exports)?;
    }

    Ok(exports)
}

fn apply_overrides(args: &GenerateArgs, design: &mut DesignConfig) {
    if let Some(primary) = &args.primary {
        design.primary_color = primary.clone();
    }
    if let Some(secondary) = &args.secondary {
        design.secondary_color = Some(secondary.clone());
    }
    if let Some(spacing) = args.spacing {
        design.base_spacing = spacing;
    }
    if let Some(font) = &args.font {
        design.font_family = font.clone();
    }
    if args.no_fallback_stack {
        design.fallback_stack = false;
    }
}

fn write_exports(dir: &Path, exports: &[Export]) -> Result<(), TokenwrightError> {
    std::fs::create_dir_all(dir)?;
    for e in exports {
        let path = dir.join(&e.filename);
        std::fs::write(&path, &e.content)?;
        tracing::info!(path = %path.display(), "Wrote export");
    }
    Ok(())
}

fn init(path: &Path, force: bool) -> Result<(), TokenwrightError> {
    if path.exists() && !force {
        return Err(TokenwrightError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    AppConfig::write_template(path)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(())
}

/// One `shade hex` line per key.
fn format_scale(scale: &ColorScale) -> String {
    let mut out = String::new();
    for (shade, hex) in scale.entries() {
        let _ = writeln!(out, "{shade:>3} {hex}");
    }
    out
}
