//! Shared test doubles.
//!
//! [`FakeEngine`] stands in at the typed seam: it implements
//! [`EngineCommands`] over an in-memory model store and a command log, so
//! tests of the registry, coordinator, and overlays never parse script
//! text. [`FakeHost`] stands in one level lower, at the script seam, for
//! channel and rendering tests.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use futures::future::BoxFuture;
use serde_json::json;

use crate::bridge::{Command, EngineCommands, ScriptHost};
use crate::error::{BridgeError, Result};
use crate::protocol::{Decoration, Position, StyleRule};

#[derive(Default)]
struct EngineState {
    ready: bool,
    next_model: u32,
    /// (uri, content), in creation order.
    models: Vec<(String, String)>,
    active: Option<String>,
    view_seq: u32,
    decorations: BTreeMap<String, Vec<Decoration>>,
    styles: BTreeMap<String, Vec<StyleRule>>,
    line_numbers: String,
    font_size: u32,
    font_family: String,
    read_only: bool,
    glyph_margin: bool,
    theme: String,
    fail_restores: bool,
    log: Vec<Command>,
}

pub struct FakeEngine {
    state: Mutex<EngineState>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(EngineState {
                ready: true,
                next_model: 1,
                line_numbers: "on".to_string(),
                font_size: 12,
                font_family: "Consolas".to_string(),
                theme: "vs".to_string(),
                ..Default::default()
            }),
        }
    }

    /// An engine that has not finished starting up: model creation answers
    /// with a null identifier, the way the real engine misbehaved.
    pub fn not_ready() -> Self {
        let engine = Self::new();
        engine.state.lock().unwrap().ready = false;
        engine
    }

    pub fn log(&self) -> Vec<Command> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn content(&self, uri: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .models
            .iter()
            .find(|(u, _)| u == uri)
            .map(|(_, c)| c.clone())
    }

    pub fn decorations(&self, name: &str) -> Option<Vec<Decoration>> {
        self.state.lock().unwrap().decorations.get(name).cloned()
    }

    pub fn style_rules(&self, name: &str) -> Option<Vec<StyleRule>> {
        self.state.lock().unwrap().styles.get(name).cloned()
    }

    pub fn style_names(&self) -> Vec<String> {
        self.state.lock().unwrap().styles.keys().cloned().collect()
    }

    pub fn set_line_numbers_raw(&self, raw: &str) {
        self.state.lock().unwrap().line_numbers = raw.to_string();
    }

    /// Make every view-state restore fail, the way a disposed-model race
    /// surfaces in the real engine.
    pub fn fail_restores(&self, fail: bool) {
        self.state.lock().unwrap().fail_restores = fail;
    }

    /// Rewind the model id counter so the next creation hands out an
    /// identifier that was already issued.
    pub fn rewind_model_ids(&self) {
        self.state.lock().unwrap().next_model = 1;
    }

    /// Create a model directly, bypassing the command path.
    pub fn seed_model(&self, content: &str) -> String {
        let mut state = self.state.lock().unwrap();
        let uri = format!("inmemory://model/{}", state.next_model);
        state.next_model += 1;
        state.models.push((uri.clone(), content.to_string()));
        uri
    }

    /// Attach a model directly. Like the real engine, this drops the
    /// contents of every decoration collection.
    pub fn attach(&self, uri: &str) {
        let mut state = self.state.lock().unwrap();
        state.active = Some(uri.to_string());
        for contents in state.decorations.values_mut() {
            contents.clear();
        }
    }

    fn handle(&self, command: &Command) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        state.log.push(command.clone());
        match command {
            Command::CreateModel { content, .. } => {
                if !state.ready {
                    // Historical engine behavior: no error, just an
                    // unusable identifier.
                    return Ok("null".to_string());
                }
                let uri = format!("inmemory://model/{}", state.next_model);
                state.next_model += 1;
                state.models.push((uri.clone(), content.clone()));
                Ok(json!(uri).to_string())
            }
            Command::DisposeModel { uri } => {
                let index = position_of(&state, uri)?;
                state.models.remove(index);
                if state.active.as_deref() == Some(uri) {
                    state.active = None;
                }
                Ok("null".to_string())
            }
            Command::SetActiveModel { uri } => {
                if let Some(uri) = uri {
                    position_of(&state, uri)?;
                }
                state.active = uri.clone();
                // Model changes invalidate decoration collections.
                for contents in state.decorations.values_mut() {
                    contents.clear();
                }
                Ok("null".to_string())
            }
            Command::ModelIds => {
                let uris: Vec<&str> = state.models.iter().map(|(u, _)| u.as_str()).collect();
                Ok(json!(uris).to_string())
            }

            Command::GetText { uri } => {
                let index = position_of(&state, uri)?;
                Ok(json!(state.models[index].1).to_string())
            }
            Command::SetText { uri, text } => {
                let index = position_of(&state, uri)?;
                state.models[index].1 = text.clone();
                Ok("null".to_string())
            }
            Command::EofPosition { uri } => {
                let index = position_of(&state, uri)?;
                Ok(json!(eof_position(&state.models[index].1)).to_string())
            }
            Command::Insert {
                uri, text, range, ..
            } => {
                let index = position_of(&state, uri)?;
                let content = &state.models[index].1;
                let start = offset_of(content, range.start_line_number, range.start_column);
                let end = offset_of(content, range.end_line_number, range.end_column);
                let mut edited: String = content.chars().take(start).collect();
                edited.push_str(text);
                edited.extend(content.chars().skip(end));
                state.models[index].1 = edited;
                Ok("null".to_string())
            }

            Command::SaveViewState => match state.active.clone() {
                None => Ok("null".to_string()),
                Some(uri) => {
                    state.view_seq += 1;
                    Ok(json!({ "model": uri, "seq": state.view_seq }).to_string())
                }
            },
            Command::RestoreViewState { .. } => {
                if state.fail_restores {
                    return Err(BridgeError::Engine(
                        "TypeError: cannot restore view state".to_string(),
                    ));
                }
                Ok("null".to_string())
            }

            Command::GetConfiguration => Ok(json!({
                "fontFamily": state.font_family,
                "fontSize": state.font_size,
                "lineNumbers": state.line_numbers,
                "readOnly": state.read_only,
                "glyphMargin": state.glyph_margin,
            })
            .to_string()),
            Command::GetFontSize => Ok(json!(state.font_size).to_string()),
            Command::SetFontSize { size } => {
                state.font_size = *size;
                Ok("null".to_string())
            }
            Command::GetFontFamily => Ok(json!(state.font_family).to_string()),
            Command::SetFontFamily { family } => {
                state.font_family = family.clone();
                Ok("null".to_string())
            }
            Command::GetLineNumbers => Ok(json!(state.line_numbers).to_string()),
            Command::SetLineNumbers { mode } => {
                state.line_numbers = mode.as_engine_value().to_string();
                Ok("null".to_string())
            }
            Command::SetReadOnly { read_only } => {
                state.read_only = *read_only;
                Ok("null".to_string())
            }
            Command::SetGlyphMargin { visible } => {
                state.glyph_margin = *visible;
                Ok("null".to_string())
            }

            Command::GetTheme => Ok(json!(state.theme).to_string()),
            Command::SetTheme { id } => {
                state.theme = id.clone();
                Ok("null".to_string())
            }

            Command::CreateDecorationCollection { name } => {
                state.decorations.insert(name.clone(), Vec::new());
                Ok("null".to_string())
            }
            Command::ClearDecorationCollection { name } => {
                if let Some(contents) = state.decorations.get_mut(name) {
                    contents.clear();
                }
                Ok("null".to_string())
            }
            Command::AppendDecorations { name, decorations } => {
                match state.decorations.get_mut(name) {
                    Some(contents) => {
                        contents.extend(decorations.iter().cloned());
                        Ok("null".to_string())
                    }
                    None => Err(BridgeError::Engine(format!(
                        "TypeError: unknown decoration collection {name:?}"
                    ))),
                }
            }

            Command::CreateStyleCollection { name } => {
                state.styles.entry(name.clone()).or_default();
                Ok("null".to_string())
            }
            Command::CreateStyleRule { collection, rule } => {
                match state.styles.get_mut(collection) {
                    Some(rules) => {
                        rules.push(rule.clone());
                        Ok("null".to_string())
                    }
                    None => Err(BridgeError::Engine(format!(
                        "TypeError: unknown style collection {collection:?}"
                    ))),
                }
            }
            Command::ClearStyleCollection { name } => {
                if let Some(rules) = state.styles.get_mut(name) {
                    rules.clear();
                }
                Ok("null".to_string())
            }
            Command::DeleteStyleCollection { name } => {
                state.styles.remove(name);
                Ok("null".to_string())
            }
            Command::DeleteAllStyleCollections => {
                state.styles.clear();
                Ok("null".to_string())
            }

            Command::Raw { .. } => Ok("null".to_string()),
        }
    }
}

fn position_of(state: &EngineState, uri: &str) -> Result<usize> {
    state
        .models
        .iter()
        .position(|(u, _)| u == uri)
        .ok_or_else(|| BridgeError::Engine(format!("TypeError: no model for {uri:?}")))
}

/// 1-based (line, column) to char offset.
fn offset_of(content: &str, line: u64, column: u64) -> usize {
    let mut offset = 0usize;
    for (index, text) in content.split('\n').enumerate() {
        if index as u64 + 1 == line {
            return offset + (column as usize - 1);
        }
        offset += text.chars().count() + 1;
    }
    content.chars().count()
}

fn eof_position(content: &str) -> Position {
    let lines: Vec<&str> = content.split('\n').collect();
    let last = lines.last().copied().unwrap_or_default();
    Position::new(lines.len() as u64, last.chars().count() as u64 + 1)
}

impl EngineCommands for FakeEngine {
    fn execute<'a>(&'a self, command: &'a Command) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move { self.handle(command) })
    }
}

/// Script-level double for channel and rendering tests.
pub struct FakeHost {
    pub scripts: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<String>>,
    pub initializations: AtomicUsize,
    pub fail_initialize: AtomicBool,
}

impl FakeHost {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            scripts: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into_iter().map(str::to_string).collect()),
            initializations: AtomicUsize::new(0),
            fail_initialize: AtomicBool::new(false),
        }
    }
}

impl ScriptHost for FakeHost {
    fn initialize(&self) -> BoxFuture<'_, Result<()>> {
        Box::pin(async move {
            if self.fail_initialize.load(Ordering::SeqCst) {
                return Err(BridgeError::EngineNotReady);
            }
            self.initializations.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    fn eval<'a>(&'a self, script: &'a str) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move {
            self.scripts.lock().unwrap().push(script.to_string());
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| "null".to_string()))
        })
    }
}
