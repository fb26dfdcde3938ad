//! Cue configuration — typed aggregate, canonical defaults, and the
//! normalizer that turns any JSON value into a complete configuration.
//!
//! Three logical zones:
//!   - `simpleHooks`: one optional sound per lifecycle event
//!   - `toolSoundConfig`: per tool, one optional sound per supported outcome
//!   - `resultAnalysisConfig`: keyword lists driving outcome classification
//!
//! `normalize` is total. Invalid values are replaced field-by-field from the
//! defaults below; unknown tools and unsupported outcome states are dropped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::constants::{
    CONFIG_VERSION, DEFAULT_ANALYSIS_TIMEOUT_MS, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_VOLUME,
};
use crate::registry::{Outcome, SimpleHook, ToolName};
use crate::schema::Fields;

// ============================================================================
// SIMPLE HOOKS
// ============================================================================

/// One sound per lifecycle event. All four keys are always serialized;
/// `null` means "no sound".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleHookMap {
    pub user_prompt_submit: Option<String>,
    pub session_start: Option<String>,
    pub stop: Option<String>,
    pub notification: Option<String>,
}

impl Default for SimpleHookMap {
    fn default() -> Self {
        Self {
            user_prompt_submit: None,
            session_start: Some("session_start".to_string()),
            stop: Some("session_night".to_string()),
            notification: None,
        }
    }
}

impl SimpleHookMap {
    pub fn get(&self, hook: SimpleHook) -> Option<&str> {
        let slot = match hook {
            SimpleHook::UserPromptSubmit => &self.user_prompt_submit,
            SimpleHook::SessionStart => &self.session_start,
            SimpleHook::Stop => &self.stop,
            SimpleHook::Notification => &self.notification,
        };
        slot.as_deref()
    }

    fn normalize(f: Fields<'_>) -> Self {
        let d = Self::default();
        Self {
            user_prompt_submit: f.nullable_string("userPromptSubmit", d.user_prompt_submit),
            session_start: f.nullable_string("sessionStart", d.session_start),
            stop: f.nullable_string("stop", d.stop),
            notification: f.nullable_string("notification", d.notification),
        }
    }
}

// ============================================================================
// TOOL OUTCOME MAP
// ============================================================================

/// Sounds for one tool, keyed by outcome. A missing key means "no sound".
pub type ToolSoundMapping = BTreeMap<Outcome, String>;

/// Per-tool outcome sounds. After normalization every registry tool has an
/// entry holding only outcomes that tool supports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolOutcomeMap(BTreeMap<ToolName, ToolSoundMapping>);

fn mapping(pairs: &[(Outcome, &str)]) -> ToolSoundMapping {
    pairs.iter().map(|(o, s)| (*o, s.to_string())).collect()
}

fn default_tool_mapping(tool: ToolName) -> ToolSoundMapping {
    use Outcome::*;
    match tool {
        ToolName::Read => mapping(&[(Success, "file_open"), (Error, "error")]),
        ToolName::Write => mapping(&[(Success, "file_create"), (Error, "build_error")]),
        ToolName::Edit => mapping(&[(Success, "item_small"), (Error, "error")]),
        ToolName::MultiEdit => mapping(&[(Success, "achievement"), (Error, "build_error")]),
        ToolName::NotebookEdit => mapping(&[(Success, "puzzle_solved"), (Error, "error")]),
        ToolName::Grep => mapping(&[
            (Success, "search_found"),
            (NoResults, "search_complete"),
            (Error, "error"),
        ]),
        ToolName::Glob => mapping(&[(Success, "search_found"), (Error, "error")]),
        ToolName::Ls => mapping(&[(Success, "menu_select"), (Error, "error")]),
        ToolName::Bash => mapping(&[(Start, "item_small"), (Success, "success"), (Error, "damage")]),
        ToolName::Task => mapping(&[
            (Start, "session_start"),
            (Success, "shrine_complete"),
            (Error, "game_over"),
        ]),
        ToolName::WebFetch => mapping(&[(Success, "search_found"), (Error, "error")]),
        ToolName::WebSearch => mapping(&[(Success, "search_complete"), (Error, "error")]),
        ToolName::TodoWrite => mapping(&[
            (Success, "todo_complete"),
            (Completed, "heart_get"),
            (AllComplete, "achievement"),
        ]),
        ToolName::ExitPlanMode => mapping(&[(Success, "menu_select")]),
    }
}

impl Default for ToolOutcomeMap {
    fn default() -> Self {
        Self(
            ToolName::ALL
                .into_iter()
                .map(|tool| (tool, default_tool_mapping(tool)))
                .collect(),
        )
    }
}

impl ToolOutcomeMap {
    pub fn get(&self, tool: ToolName, outcome: Outcome) -> Option<&str> {
        self.0.get(&tool)?.get(&outcome).map(String::as_str)
    }

    pub fn mapping(&self, tool: ToolName) -> Option<&ToolSoundMapping> {
        self.0.get(&tool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ToolName, &ToolSoundMapping)> {
        self.0.iter()
    }

    /// Rebuild key-by-key over the registry. A tool whose raw entry is not an
    /// object gets its default sub-map; unknown tool keys are dropped.
    fn normalize(f: Fields<'_>) -> Self {
        for (key, _) in f.entries() {
            if ToolName::parse(key).is_none() {
                tracing::debug!(tool = %key, "Dropping sound mapping for unknown tool");
            }
        }

        let map = ToolName::ALL
            .into_iter()
            .map(|tool| {
                let entry = match f.get(tool.as_str()) {
                    Some(Value::Object(obj)) => normalize_tool_mapping(tool, obj),
                    other => {
                        if other.is_some() {
                            tracing::debug!(tool = %tool, "Tool sound mapping is not an object, using default");
                        }
                        default_tool_mapping(tool)
                    }
                };
                (tool, entry)
            })
            .collect();
        Self(map)
    }
}

fn normalize_tool_mapping(tool: ToolName, obj: &Map<String, Value>) -> ToolSoundMapping {
    tool.supported_outcomes()
        .iter()
        .filter_map(|outcome| {
            obj.get(outcome.as_str())
                .and_then(|v| v.as_str())
                .map(|sound| (*outcome, sound.to_string()))
        })
        .collect()
}

// ============================================================================
// GLOBAL SETTINGS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Playback volume in [0, 1]; clamped by the player, not here.
    pub volume: f64,
    /// Master switch: when false, hooks play nothing.
    pub enabled: bool,
    /// Empty = the built-in sounds directory.
    pub sounds_directory: String,
    pub use_intelligent_mapping: bool,
    pub enable_performance_optimization: bool,
    pub enable_debug_mode: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            enabled: true,
            sounds_directory: String::new(),
            use_intelligent_mapping: true,
            enable_performance_optimization: true,
            enable_debug_mode: false,
        }
    }
}

impl GlobalSettings {
    fn normalize(f: Fields<'_>) -> Self {
        let d = Self::default();
        Self {
            volume: f.number("volume", d.volume),
            enabled: f.boolean("enabled", d.enabled),
            sounds_directory: f.string("soundsDirectory", d.sounds_directory),
            use_intelligent_mapping: f.boolean("useIntelligentMapping", d.use_intelligent_mapping),
            enable_performance_optimization: f
                .boolean("enablePerformanceOptimization", d.enable_performance_optimization),
            enable_debug_mode: f.boolean("enableDebugMode", d.enable_debug_mode),
        }
    }
}

// ============================================================================
// HOOK CONFIGS
// ============================================================================

/// Per-hook mapping options. Persisted for the presentation layer; the
/// sound resolver does not read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligentMappingConfig {
    pub enabled: bool,
    pub learning_mode: bool,
    pub confidence_threshold: f64,
    pub use_default_for_unknown_tools: bool,
    pub default_success_sound: String,
    pub default_error_sound: String,
    pub enable_result_analysis: bool,
    pub error_keywords: Vec<String>,
}

impl Default for IntelligentMappingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            learning_mode: false,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            use_default_for_unknown_tools: true,
            default_success_sound: "success".to_string(),
            default_error_sound: "error".to_string(),
            enable_result_analysis: true,
            error_keywords: strings(&[
                "error",
                "failed",
                "exception",
                "not found",
                "permission denied",
                "timeout",
            ]),
        }
    }
}

impl IntelligentMappingConfig {
    fn normalize(f: Fields<'_>) -> Self {
        let d = Self::default();
        Self {
            enabled: f.boolean("enabled", d.enabled),
            learning_mode: f.boolean("learningMode", d.learning_mode),
            confidence_threshold: f.number("confidenceThreshold", d.confidence_threshold),
            use_default_for_unknown_tools: f
                .boolean("useDefaultForUnknownTools", d.use_default_for_unknown_tools),
            default_success_sound: f.string("defaultSuccessSound", d.default_success_sound),
            default_error_sound: f.string("defaultErrorSound", d.default_error_sound),
            enable_result_analysis: f.boolean("enableResultAnalysis", d.enable_result_analysis),
            error_keywords: f.string_list("errorKeywords", &d.error_keywords),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSoundConfig {
    pub hook_event_id: String,
    pub active_sound_id: String,
    pub use_tool_mapping: bool,
    pub intelligent_mapping: IntelligentMappingConfig,
}

impl HookSoundConfig {
    fn new(hook_event_id: &str) -> Self {
        Self {
            hook_event_id: hook_event_id.to_string(),
            active_sound_id: String::new(),
            use_tool_mapping: false,
            intelligent_mapping: IntelligentMappingConfig::default(),
        }
    }

    /// Validity is record-level: without a non-empty string `hookEventId`
    /// the whole record is rejected. Other fields default individually.
    pub fn normalize(raw: &Value) -> Option<Self> {
        let f = Fields::of(Some(raw), "hookConfigs");
        let id = f.get("hookEventId")?.as_str().filter(|s| !s.is_empty())?;
        Some(Self {
            hook_event_id: id.to_string(),
            active_sound_id: f.string("activeSoundId", String::new()),
            use_tool_mapping: f.boolean("useToolMapping", false),
            intelligent_mapping: IntelligentMappingConfig::normalize(
                f.section("intelligentMapping", "hookConfigs.intelligentMapping"),
            ),
        })
    }
}

fn default_hook_configs() -> BTreeMap<String, HookSoundConfig> {
    ["postToolUse", "userPromptSubmit", "sessionStart", "stop"]
        .into_iter()
        .map(|id| (id.to_string(), HookSoundConfig::new(id)))
        .collect()
}

fn normalize_hook_configs(f: Fields<'_>) -> BTreeMap<String, HookSoundConfig> {
    let mut configs = BTreeMap::new();
    for (key, raw) in f.entries() {
        match HookSoundConfig::normalize(raw) {
            Some(config) => {
                configs.insert(key.clone(), config);
            }
            None => tracing::debug!(key = %key, "Rejecting hook config without hookEventId"),
        }
    }
    if configs.is_empty() {
        default_hook_configs()
    } else {
        configs
    }
}

// ============================================================================
// CLASSIFICATION SETTINGS
// ============================================================================

/// Per-tool replacement for the global keyword lists. `None` inherits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_indicators: Option<Vec<String>>,
}

/// Settings consumed by the outcome classifier.
///
/// `success_keywords`, `confidence_threshold` and `learning_mode` are
/// persisted but not read by any decision logic. `timeout_ms` is advisory:
/// callers bound their own wait for a tool response with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSettings {
    pub enabled: bool,
    pub success_keywords: Vec<String>,
    pub error_keywords: Vec<String>,
    pub success_indicators: Vec<String>,
    pub timeout_ms: u64,
    pub confidence_threshold: f64,
    pub learning_mode: bool,
    pub tool_overrides: BTreeMap<ToolName, KeywordOverride>,
}

const DEFAULT_SUCCESS_WORDS: &[&str] =
    &["success", "completed", "done", "finished", "ok", "created", "updated"];

const DEFAULT_ERROR_WORDS: &[&str] = &[
    "error",
    "failed",
    "exception",
    "not found",
    "permission denied",
    "timeout",
    "invalid",
    "forbidden",
];

/// TodoWrite reports progress with "completed"; without this override the
/// generic success indicators would mask its completion outcomes.
fn default_tool_overrides() -> BTreeMap<ToolName, KeywordOverride> {
    BTreeMap::from([(
        ToolName::TodoWrite,
        KeywordOverride {
            error_keywords: None,
            success_indicators: Some(Vec::new()),
        },
    )])
}

impl Default for ClassificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            success_keywords: strings(DEFAULT_SUCCESS_WORDS),
            error_keywords: strings(DEFAULT_ERROR_WORDS),
            success_indicators: strings(DEFAULT_SUCCESS_WORDS),
            timeout_ms: DEFAULT_ANALYSIS_TIMEOUT_MS,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            learning_mode: false,
            tool_overrides: default_tool_overrides(),
        }
    }
}

impl ClassificationSettings {
    /// Error keywords in effect for `tool` (global list unless overridden).
    pub fn error_keywords_for(&self, tool: Option<ToolName>) -> &[String] {
        tool.and_then(|t| self.tool_overrides.get(&t))
            .and_then(|o| o.error_keywords.as_deref())
            .unwrap_or(&self.error_keywords)
    }

    pub fn success_indicators_for(&self, tool: Option<ToolName>) -> &[String] {
        tool.and_then(|t| self.tool_overrides.get(&t))
            .and_then(|o| o.success_indicators.as_deref())
            .unwrap_or(&self.success_indicators)
    }

    fn normalize(f: Fields<'_>) -> Self {
        let d = Self::default();
        Self {
            enabled: f.boolean("enabled", d.enabled),
            success_keywords: f.string_list("successKeywords", &d.success_keywords),
            error_keywords: f.string_list("errorKeywords", &d.error_keywords),
            success_indicators: f.string_list("successIndicators", &d.success_indicators),
            timeout_ms: f.unsigned("timeoutMs", d.timeout_ms),
            confidence_threshold: f.number("confidenceThreshold", d.confidence_threshold),
            learning_mode: f.boolean("learningMode", d.learning_mode),
            tool_overrides: normalize_tool_overrides(
                f.section("toolOverrides", "resultAnalysisConfig.toolOverrides"),
            ),
        }
    }
}

fn normalize_tool_overrides(f: Fields<'_>) -> BTreeMap<ToolName, KeywordOverride> {
    let mut defaults = default_tool_overrides();
    if !f.is_present() {
        return defaults;
    }
    ToolName::ALL
        .into_iter()
        .filter_map(|tool| match f.get(tool.as_str()) {
            Some(raw) if raw.is_object() => {
                let o = Fields::of(Some(raw), "resultAnalysisConfig.toolOverrides");
                Some((
                    tool,
                    KeywordOverride {
                        error_keywords: o.optional_string_list("errorKeywords"),
                        success_indicators: o.optional_string_list("successIndicators"),
                    },
                ))
            }
            _ => defaults.remove(&tool).map(|d| (tool, d)),
        })
        .collect()
}

// ============================================================================
// CUE CONFIG
// ============================================================================

/// Complete, normalized configuration. Treat a value as a read-only
/// snapshot; edits go through [`normalize`] to produce a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueConfig {
    pub version: String,
    pub simple_hooks: SimpleHookMap,
    pub tool_sound_config: ToolOutcomeMap,
    pub global_settings: GlobalSettings,
    pub hook_configs: BTreeMap<String, HookSoundConfig>,
    pub result_analysis_config: ClassificationSettings,
}

impl Default for CueConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            simple_hooks: SimpleHookMap::default(),
            tool_sound_config: ToolOutcomeMap::default(),
            global_settings: GlobalSettings::default(),
            hook_configs: default_hook_configs(),
            result_analysis_config: ClassificationSettings::default(),
        }
    }
}

impl CueConfig {
    /// See [`normalize`].
    pub fn from_value(raw: &Value) -> Self {
        normalize(raw)
    }

    pub fn to_value(&self) -> Value {
        // Plain structs with string keys: serialization cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Normalize an arbitrary JSON value into a complete configuration.
///
/// Never fails. Falls back to the legacy `postToolUse` map (success/error
/// only) when `toolSoundConfig` is missing.
pub fn normalize(raw: &Value) -> CueConfig {
    let root = Fields::of(Some(raw), "root");
    let d = CueConfig::default();

    let tools_raw = root
        .get("toolSoundConfig")
        .filter(|v| v.is_object())
        .or_else(|| {
            let legacy = root.get("postToolUse").filter(|v| v.is_object());
            if legacy.is_some() {
                tracing::info!("Migrating legacy postToolUse sound map");
            }
            legacy
        });

    CueConfig {
        version: root.string("version", d.version),
        simple_hooks: SimpleHookMap::normalize(root.section("simpleHooks", "simpleHooks")),
        tool_sound_config: ToolOutcomeMap::normalize(Fields::of(tools_raw, "toolSoundConfig")),
        global_settings: GlobalSettings::normalize(root.section("globalSettings", "globalSettings")),
        hook_configs: normalize_hook_configs(root.section("hookConfigs", "hookConfigs")),
        result_analysis_config: ClassificationSettings::normalize(
            root.section("resultAnalysisConfig", "resultAnalysisConfig"),
        ),
    }
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renormalize(cfg: &CueConfig) -> CueConfig {
        normalize(&cfg.to_value())
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        let cfg = normalize(&json!({}));
        assert_eq!(cfg, CueConfig::default());

        let hooks = &cfg.simple_hooks;
        assert_eq!(hooks.user_prompt_submit, None);
        assert_eq!(hooks.session_start.as_deref(), Some("session_start"));
        assert_eq!(hooks.stop.as_deref(), Some("session_night"));
        assert_eq!(hooks.notification, None);

        for tool in ToolName::ALL {
            assert!(cfg.tool_sound_config.mapping(tool).is_some(), "missing {}", tool);
        }
    }

    #[test]
    fn test_simple_hooks_always_serialize_four_keys() {
        let value = CueConfig::default().to_value();
        let hooks = value["simpleHooks"].as_object().unwrap();
        assert_eq!(hooks.len(), 4);
        assert!(hooks["userPromptSubmit"].is_null());
        assert!(hooks["notification"].is_null());
    }

    #[test]
    fn test_totality_on_non_objects() {
        for raw in [json!(null), json!([]), json!([{"a": 1}]), json!("config"), json!(42), json!(true)] {
            assert_eq!(normalize(&raw), CueConfig::default(), "input {}", raw);
        }
    }

    #[test]
    fn test_single_corrupt_field_keeps_siblings() {
        let raw = json!({
            "version": "2.1.0",
            "globalSettings": {
                "volume": "loud",
                "enabled": false,
                "soundsDirectory": "/opt/sounds",
                "enableDebugMode": true
            },
            "simpleHooks": {"notification": "ping"}
        });
        let cfg = normalize(&raw);

        let mut expected = CueConfig::default();
        expected.version = "2.1.0".to_string();
        expected.global_settings.enabled = false;
        expected.global_settings.sounds_directory = "/opt/sounds".to_string();
        expected.global_settings.enable_debug_mode = true;
        expected.simple_hooks.notification = Some("ping".to_string());
        assert_eq!(cfg, expected);
        assert_eq!(cfg.global_settings.volume, DEFAULT_VOLUME);
    }

    #[test]
    fn test_explicit_null_hook_is_preserved() {
        let cfg = normalize(&json!({"simpleHooks": {"sessionStart": null, "stop": 7}}));
        assert_eq!(cfg.simple_hooks.session_start, None);
        assert_eq!(cfg.simple_hooks.stop.as_deref(), Some("session_night"));
    }

    #[test]
    fn test_tool_map_rebuilt_key_by_key() {
        let raw = json!({
            "toolSoundConfig": {
                "Read": {"success": "page_turn", "no_results": "nope", "error": null},
                "Bash": "loud",
                "Grep": {"no_results": "crickets", "success": 5},
                "mcp__custom__tool": {"success": "x"}
            }
        });
        let cfg = normalize(&raw);
        let tools = &cfg.tool_sound_config;

        // Extraneous state dropped, explicit null absent.
        let read = tools.mapping(ToolName::Read).unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(tools.get(ToolName::Read, Outcome::Success), Some("page_turn"));
        assert_eq!(tools.get(ToolName::Read, Outcome::Error), None);

        // Non-object entry → default sub-map.
        assert_eq!(tools.mapping(ToolName::Bash), Some(&default_tool_mapping(ToolName::Bash)));

        // Wrong-typed state dropped, not defaulted.
        assert_eq!(tools.get(ToolName::Grep, Outcome::NoResults), Some("crickets"));
        assert_eq!(tools.get(ToolName::Grep, Outcome::Success), None);

        // Missing tools defaulted, unknown tools dropped.
        assert_eq!(tools.get(ToolName::Write, Outcome::Success), Some("file_create"));
        assert_eq!(tools.iter().count(), ToolName::ALL.len());
        assert!(cfg.to_value()["toolSoundConfig"].get("mcp__custom__tool").is_none());
    }

    #[test]
    fn test_legacy_post_tool_use_is_migrated() {
        let raw = json!({
            "postToolUse": {
                "Read": {"success": "legacy_open", "error": null},
                "Grep": {"success": "legacy_find", "error": "legacy_err"}
            }
        });
        let cfg = normalize(&raw);
        assert_eq!(cfg.tool_sound_config.get(ToolName::Read, Outcome::Success), Some("legacy_open"));
        assert_eq!(cfg.tool_sound_config.get(ToolName::Read, Outcome::Error), None);
        assert_eq!(cfg.tool_sound_config.get(ToolName::Grep, Outcome::NoResults), None);
        assert!(cfg.to_value().get("postToolUse").is_none());

        // toolSoundConfig wins when both are present.
        let both = json!({
            "postToolUse": {"Read": {"success": "legacy_open"}},
            "toolSoundConfig": {"Read": {"success": "current_open"}}
        });
        assert_eq!(
            normalize(&both).tool_sound_config.get(ToolName::Read, Outcome::Success),
            Some("current_open")
        );
    }

    #[test]
    fn test_hook_configs_are_record_level() {
        let raw = json!({
            "hookConfigs": {
                "good": {"hookEventId": "stop", "activeSoundId": 3, "useToolMapping": true},
                "empty_id": {"hookEventId": "", "activeSoundId": "beep"},
                "no_id": {"activeSoundId": "beep"},
                "not_object": "stop"
            }
        });
        let cfg = normalize(&raw);
        assert_eq!(cfg.hook_configs.len(), 1);
        let good = &cfg.hook_configs["good"];
        assert_eq!(good.hook_event_id, "stop");
        assert_eq!(good.active_sound_id, "");
        assert!(good.use_tool_mapping);
        assert_eq!(good.intelligent_mapping, IntelligentMappingConfig::default());
    }

    #[test]
    fn test_hook_configs_fall_back_when_nothing_valid() {
        let cfg = normalize(&json!({"hookConfigs": {"bad": {"hookEventId": 1}}}));
        assert_eq!(cfg.hook_configs, default_hook_configs());
    }

    #[test]
    fn test_classification_settings_fields() {
        let raw = json!({
            "resultAnalysisConfig": {
                "enabled": "yes",
                "errorKeywords": ["boom", 12, "FATAL"],
                "successIndicators": "ok",
                "timeoutMs": -1,
                "confidenceThreshold": 0.5,
                "toolOverrides": {
                    "Bash": {"errorKeywords": ["segfault"]},
                    "Unknown": {"errorKeywords": ["x"]}
                }
            }
        });
        let s = normalize(&raw).result_analysis_config;
        let d = ClassificationSettings::default();
        assert!(s.enabled);
        assert_eq!(s.error_keywords, vec!["boom", "FATAL"]);
        assert_eq!(s.success_indicators, d.success_indicators);
        assert_eq!(s.timeout_ms, DEFAULT_ANALYSIS_TIMEOUT_MS);
        assert_eq!(s.confidence_threshold, 0.5);

        assert_eq!(s.error_keywords_for(Some(ToolName::Bash)), &["segfault".to_string()]);
        assert_eq!(s.error_keywords_for(Some(ToolName::Read)), s.error_keywords.as_slice());
        assert_eq!(s.error_keywords_for(None), s.error_keywords.as_slice());
        // Default TodoWrite override survives when the caller does not mention it.
        assert!(s.success_indicators_for(Some(ToolName::TodoWrite)).is_empty());
        assert_eq!(s.tool_overrides.len(), 2);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            json!({}),
            json!(null),
            json!({"simpleHooks": {"sessionStart": null, "notification": "bell"}}),
            json!({"toolSoundConfig": {"Read": {}, "TodoWrite": {"completed": "ding", "start": "x"}}}),
            json!({"postToolUse": {"Bash": {"success": "yay", "error": "boo"}}}),
            json!({"hookConfigs": {"k": {"hookEventId": "notification", "intelligentMapping": 4}}}),
            json!({"resultAnalysisConfig": {"toolOverrides": {"TodoWrite": {}, "Grep": {"successIndicators": []}}}}),
            json!({"globalSettings": {"volume": 1.7, "enabled": "no"}, "version": 3}),
        ];
        for raw in inputs {
            let once = normalize(&raw);
            assert_eq!(renormalize(&once), once, "not idempotent for {}", raw);
        }
    }

    #[test]
    fn test_typed_roundtrip_through_serde() {
        let cfg = CueConfig::default();
        let text = serde_json::to_string(&cfg).unwrap();
        let back: CueConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back, cfg);
        assert_eq!(cfg.to_value()["toolSoundConfig"]["Grep"]["no_results"], "search_complete");
        assert!(cfg.to_value()["toolSoundConfig"].get("LS").is_some());
    }
}
