//! Browser bindings. Everything crosses the boundary as JSON text.

use tokenwright_core::{ExportFormat, TokenConfig, TokenwrightError};
use wasm_bindgen::prelude::*;

/// `TokenConfig` JSON (camelCase keys) in, `DesignTokens` JSON out.
#[wasm_bindgen]
pub fn generate_tokens(config_json: &str) -> Result<String, JsError> {
    tokens_json(config_json).map_err(to_js)
}

/// One 11-step scale as a JSON object keyed by shade.
#[wasm_bindgen]
pub fn generate_color_scale(color: &str) -> Result<String, JsError> {
    color_scale_json(color).map_err(to_js)
}

/// Exported text for `format` (`css`, `tailwind` or `json`).
#[wasm_bindgen]
pub fn export_tokens(config_json: &str, format: &str) -> Result<String, JsError> {
    export_text(config_json, format).map_err(to_js)
}

/// Conventional download name for `format`.
#[wasm_bindgen]
pub fn export_filename(format: &str) -> Result<String, JsError> {
    format
        .parse::<ExportFormat>()
        .map(|f| f.filename().to_string())
        .map_err(to_js)
}

/// Matching catalog fonts as a JSON array.
#[wasm_bindgen]
pub fn search_fonts(query: &str) -> String {
    serde_json::to_string(&tokenwright_core::fonts::search_fonts(query))
        .unwrap_or_else(|_| "[]".to_string())
}

fn to_js(e: TokenwrightError) -> JsError {
    JsError::new(&e.to_string())
}

fn parse_config(config_json: &str) -> Result<TokenConfig, TokenwrightError> {
    Ok(serde_json::from_str(config_json)?)
}

fn tokens_json(config_json: &str) -> Result<String, TokenwrightError> {
    let config = parse_config(config_json)?;
    let tokens = tokenwright_core::generate_design_tokens(&config)?;
    Ok(serde_json::to_string(&tokens)?)
}

fn color_scale_json(color: &str) -> Result<String, TokenwrightError> {
    let scale = tokenwright_core::generate_color_scale(color)?;
    Ok(serde_json::to_string(&scale)?)
}

fn export_text(config_json: &str, format: &str) -> Result<String, TokenwrightError> {
    let format: ExportFormat = format.parse()?;
    let config = parse_config(config_json)?;
    let tokens = tokenwright_core::generate_design_tokens(&config)?;
    Ok(tokenwright_core::export(format, &config, &tokens)?.content)
}
