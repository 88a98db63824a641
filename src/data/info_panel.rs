use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// A card advertising another app; "Try" hands `url` to the OS.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PromotedApp {
    pub image_ref: String,
    pub name: String,
    pub description: String,
    pub url: String,
}

impl PromotedApp {
    pub fn new(image_ref: &str, name: &str, description: &str, url: &str) -> Self {
        PromotedApp {
            image_ref: image_ref.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            url: url.to_string(),
        }
    }
}

/// Static content of the info panel: the app cards and the usage notes.
/// Reads the `apps` and `usage` keys of config.yaml; either key may be absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InfoPanelData {
    #[serde(default = "builtin_apps")]
    pub apps: Vec<PromotedApp>,
    #[serde(default = "builtin_usage")]
    pub usage: Vec<String>,
}

impl Default for InfoPanelData {
    fn default() -> Self {
        InfoPanelData {
            apps: builtin_apps(),
            usage: builtin_usage(),
        }
    }
}

impl Persistable for InfoPanelData {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl InfoPanelData {
    pub fn find_app(&self, name: &str) -> Option<&PromotedApp> {
        self.apps
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }
}

pub fn builtin_usage() -> Vec<String> {
    vec![
        "Users can scroll to choose a date.".to_string(),
        "The app displays the corresponding day of the week for the selected date.".to_string(),
        "It can show results for dates ranging from the year 1800 to 2300.".to_string(),
    ]
}

pub fn builtin_apps() -> Vec<PromotedApp> {
    vec![
        PromotedApp::new(
            "sos",
            "SOS Light",
            "SOS Light is designed to maximize the chances of getting help in emergency situations.",
            "https://apps.apple.com/app/s0s-light/id6504213303",
        ),
        PromotedApp::new(
            "takemedication",
            "Take Medication",
            "Just press any of the 24 buttons, each representing an hour of the day, and you'll get timely reminders to take your medication. It's easy, quick, and ensures you never miss a dose!",
            "https://apps.apple.com/id/app/take-medication/id6736924598",
        ),
        PromotedApp::new(
            "timetell",
            "TimeTell",
            "Announce the time every 30 seconds, no more guessing and checking your watch, for time-sensitive tasks.",
            "https://apps.apple.com/id/app/loopspeak/id6473384030",
        ),
        PromotedApp::new(
            "worry",
            "Worry Bin",
            "A place for worry.",
            "https://apps.apple.com/id/app/worry-bin/id6498626727",
        ),
        PromotedApp::new(
            "loopspeak",
            "LOOPSpeak",
            "Type or paste your text, play in loop, and enjoy hands-free narration.",
            "https://apps.apple.com/id/app/loopspeak/id6473384030",
        ),
        PromotedApp::new(
            "insomnia",
            "Insomnia Sheep",
            "Designed to ease your mind and help you relax leading up to sleep.",
            "https://apps.apple.com/id/app/insomnia-sheep/id6479727431",
        ),
        PromotedApp::new(
            "iprogram",
            "iProgramMe",
            "Custom affirmations, schedule notifications, stay inspired daily.",
            "https://apps.apple.com/id/app/iprogramme/id6470770935",
        ),
        PromotedApp::new(
            "temptation",
            "TemptationTrack",
            "One button to track milestones, monitor progress, stay motivated.",
            "https://apps.apple.com/id/app/temptationtrack/id6471236988",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_apps_are_complete_records() {
        let apps = builtin_apps();
        assert_eq!(apps.len(), 8);
        for app in &apps {
            assert!(!app.name.is_empty());
            assert!(!app.description.is_empty());
            assert!(app.url.starts_with("https://"), "{}", app.url);
        }
    }

    #[test]
    fn test_default_uses_builtin_content() {
        let data = InfoPanelData::default();
        assert_eq!(data.apps, builtin_apps());
        assert_eq!(data.usage.len(), 3);
    }

    #[test]
    fn test_missing_keys_fall_back_to_builtin() {
        let yaml = "settings:\n  min_year: 1900\n";
        let data: InfoPanelData = serde_norway::from_str(yaml).unwrap();
        assert_eq!(data, InfoPanelData::default());
    }

    #[test]
    fn test_apps_key_overrides_builtin_list() {
        let yaml = "apps:\n  - image_ref: x\n    name: Xray\n    description: d\n    url: https://example.com\n";
        let data: InfoPanelData = serde_norway::from_str(yaml).unwrap();
        assert_eq!(data.apps.len(), 1);
        assert_eq!(data.apps[0].name, "Xray");
        assert_eq!(data.usage, builtin_usage());
    }

    #[test]
    fn test_empty_apps_list_is_respected() {
        let data: InfoPanelData = serde_norway::from_str("apps: []").unwrap();
        assert!(data.apps.is_empty());
    }

    #[test]
    fn test_find_app_is_case_insensitive() {
        let data = InfoPanelData::default();
        assert_eq!(data.find_app("worry bin").unwrap().image_ref, "worry");
        assert!(data.find_app("Dry Eye Read").is_none());
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let mut data = InfoPanelData::default();
        data.apps.truncate(2);
        data.save_to(tmp.path()).unwrap();
        let loaded = InfoPanelData::load_from(tmp.path()).unwrap();
        assert_eq!(loaded, data);
    }
}
