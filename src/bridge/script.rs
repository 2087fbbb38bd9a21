//! Rendering of [`Command`] values into engine script text.
//!
//! The engine exposes a global editor namespace for model management and a
//! single editor-instance handle for view concerns; both names are pinned
//! here. Every interpolated value goes through [`codec::literal`] - raw
//! concatenation of caller data into script text is what this module
//! exists to prevent.

use super::codec;
use super::command::Command;
use crate::error::Result;
use crate::protocol::EditTracking;

/// Global namespace for model creation/lookup/disposal.
const EDITOR_GLOBAL: &str = "monaco.editor";
/// The editor-instance handle. Must match the variable name bound by the
/// host page that loads the engine.
const EDITOR_HANDLE: &str = "editor";
/// Engine-side registry holding named decoration collections.
const DECORATIONS_REGISTRY: &str = "globalThis.__kestrelDecorations";
/// Engine-side registry holding named style-sheet elements.
const STYLES_REGISTRY: &str = "globalThis.__kestrelStyles";

/// A model lookup expression for `uri`.
fn model(uri: &str) -> Result<String> {
    Ok(format!("{EDITOR_GLOBAL}.getModel({})", codec::literal(&uri)?))
}

/// Render a command to the script text that performs it.
pub fn render(command: &Command) -> Result<String> {
    let script = match command {
        Command::CreateModel { content, language } => format!(
            "{EDITOR_GLOBAL}.createModel({}, {}).uri.toString()",
            codec::literal(content)?,
            codec::literal(language)?,
        ),
        Command::DisposeModel { uri } => format!("{}.dispose()", model(uri)?),
        Command::SetActiveModel { uri: Some(uri) } => {
            format!("{EDITOR_HANDLE}.setModel({})", model(uri)?)
        }
        Command::SetActiveModel { uri: None } => format!("{EDITOR_HANDLE}.setModel(null)"),
        Command::ModelIds => {
            format!("{EDITOR_GLOBAL}.getModels().map(m => m.uri.toString())")
        }

        Command::GetText { uri } => format!("{}.getValue()", model(uri)?),
        Command::SetText { uri, text } => {
            format!("{}.setValue({})", model(uri)?, codec::literal(text)?)
        }
        Command::EofPosition { uri } => format!(
            "{}.getPositionAt({}.getValueLength())",
            model(uri)?,
            model(uri)?,
        ),
        Command::Insert {
            uri,
            text,
            range,
            tracking,
        } => {
            let edit = format!(
                "pushEditOperations([], [{{text: {}, range: {}}}], () => null)",
                codec::literal(text)?,
                codec::literal(range)?,
            );
            match tracking {
                // No undo stop: the edit does not land in the user's
                // undo/redo history as a separate step.
                EditTracking::Untracked => format!("{}.{edit}", model(uri)?),
                EditTracking::Tracked => format!(
                    "(() => {{ const m = {}; m.pushStackElement(); m.{edit}; \
                     m.pushStackElement(); }})()",
                    model(uri)?,
                ),
            }
        }

        Command::SaveViewState => format!("{EDITOR_HANDLE}.saveViewState()"),
        Command::RestoreViewState { state } => format!(
            "{EDITOR_HANDLE}.restoreViewState({})",
            codec::literal(state)?,
        ),

        Command::GetConfiguration => format!("{EDITOR_HANDLE}.getConfiguration()"),
        Command::GetFontSize => format!("{EDITOR_HANDLE}.getConfiguration().fontSize"),
        Command::SetFontSize { size } => format!(
            "{EDITOR_HANDLE}.updateOptions({{ fontSize: {} }})",
            codec::literal(size)?,
        ),
        Command::GetFontFamily => format!("{EDITOR_HANDLE}.getConfiguration().fontFamily"),
        Command::SetFontFamily { family } => format!(
            "{EDITOR_HANDLE}.updateOptions({{ fontFamily: {} }})",
            codec::literal(family)?,
        ),
        Command::GetLineNumbers => format!("{EDITOR_HANDLE}.getConfiguration().lineNumbers"),
        Command::SetLineNumbers { mode } => format!(
            "{EDITOR_HANDLE}.updateOptions({{ lineNumbers: {} }})",
            codec::literal(mode)?,
        ),
        Command::SetReadOnly { read_only } => format!(
            "{EDITOR_HANDLE}.updateOptions({{ readOnly: {} }})",
            codec::literal(read_only)?,
        ),
        Command::SetGlyphMargin { visible } => format!(
            "{EDITOR_HANDLE}.updateOptions({{ glyphMargin: {} }})",
            codec::literal(visible)?,
        ),

        Command::GetTheme => format!("{EDITOR_HANDLE}._themeService.getColorTheme().id"),
        Command::SetTheme { id } => {
            format!("{EDITOR_GLOBAL}.setTheme({})", codec::literal(id)?)
        }

        Command::CreateDecorationCollection { name } => {
            let key = codec::literal(name)?;
            format!(
                "(() => {{ const r = {DECORATIONS_REGISTRY} ??= {{}}; \
                 r[{key}]?.clear(); \
                 r[{key}] = {EDITOR_HANDLE}.createDecorationsCollection([]); }})()",
            )
        }
        Command::ClearDecorationCollection { name } => format!(
            "{DECORATIONS_REGISTRY}?.[{}]?.clear()",
            codec::literal(name)?,
        ),
        Command::AppendDecorations { name, decorations } => format!(
            "{DECORATIONS_REGISTRY}[{}].append({})",
            codec::literal(name)?,
            codec::literal(decorations)?,
        ),

        Command::CreateStyleCollection { name } => {
            let key = codec::literal(name)?;
            format!(
                "(() => {{ const r = {STYLES_REGISTRY} ??= {{}}; \
                 if (!r[{key}]) {{ const el = document.createElement(\"style\"); \
                 document.head.appendChild(el); r[{key}] = el; }} }})()",
            )
        }
        Command::CreateStyleRule { collection, rule } => format!(
            "{STYLES_REGISTRY}[{}].sheet.insertRule({})",
            codec::literal(collection)?,
            codec::literal(&rule.css_text())?,
        ),
        Command::ClearStyleCollection { name } => format!(
            "(() => {{ const el = {STYLES_REGISTRY}?.[{}]; if (el) \
             {{ while (el.sheet.cssRules.length) el.sheet.deleteRule(0); }} }})()",
            codec::literal(name)?,
        ),
        Command::DeleteStyleCollection { name } => {
            let key = codec::literal(name)?;
            format!(
                "(() => {{ const r = {STYLES_REGISTRY}; const el = r?.[{key}]; \
                 if (el) {{ el.remove(); delete r[{key}]; }} }})()",
            )
        }
        Command::DeleteAllStyleCollections => format!(
            "(() => {{ const r = {STYLES_REGISTRY}; if (r) \
             {{ for (const k of Object.keys(r)) {{ r[k].remove(); delete r[k]; }} }} }})()",
        ),

        Command::Raw { script } => script.clone(),
    };
    Ok(script)
}
