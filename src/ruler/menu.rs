use crate::ruler::geometry::Orientation;
use crate::ruler::window::DisplaySettings;

/// One of the ten opacity presets, 10% through 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpacityStep(u8);

impl OpacityStep {
    pub fn new(percent: u8) -> Option<Self> {
        if (10..=100).contains(&percent) && percent % 10 == 0 {
            Some(Self(percent))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = OpacityStep> {
        (1..=10u8).map(|n| OpacityStep(n * 10))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    pub fn opacity(self) -> f32 {
        f32::from(self.0) / 100.0
    }

    pub fn label(self) -> String {
        format!("{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToggleStayOnTop,
    ToggleOrientation,
    ToggleTooltip,
    SetOpacity(OpacityStep),
    About,
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Toggle {
        label: String,
        checked: bool,
        action: MenuAction,
    },
    Submenu {
        label: String,
        entries: Vec<MenuEntry>,
    },
    Item {
        label: String,
        action: MenuAction,
    },
    Separator,
}

impl MenuEntry {
    fn toggle(label: &str, checked: bool, action: MenuAction) -> Self {
        MenuEntry::Toggle {
            label: label.to_string(),
            checked,
            action,
        }
    }

    fn item(label: &str, action: MenuAction) -> Self {
        MenuEntry::Item {
            label: label.to_string(),
            action,
        }
    }
}

/// Build the context menu for the current state. Check marks come from the
/// window state passed in, never from the widgets.
pub fn menu_entries(display: &DisplaySettings, orientation: Orientation) -> Vec<MenuEntry> {
    let opacity_entries = OpacityStep::all()
        .map(|step| MenuEntry::Toggle {
            label: step.label(),
            checked: display.opacity == step.opacity(),
            action: MenuAction::SetOpacity(step),
        })
        .collect();

    vec![
        MenuEntry::toggle("Stay On Top", display.stay_on_top, MenuAction::ToggleStayOnTop),
        MenuEntry::toggle(
            "Vertical",
            orientation.is_vertical(),
            MenuAction::ToggleOrientation,
        ),
        MenuEntry::toggle("Tool Tip", display.tooltip_enabled, MenuAction::ToggleTooltip),
        MenuEntry::Submenu {
            label: "Opacity".to_string(),
            entries: opacity_entries,
        },
        MenuEntry::Separator,
        MenuEntry::item("About...", MenuAction::About),
        MenuEntry::Separator,
        MenuEntry::item("Exit", MenuAction::Exit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_percent_is_exactly_point_four() {
        let step = OpacityStep::new(40).unwrap();
        assert_eq!(step.opacity(), 0.40);
        assert_eq!(step.label(), "40%");
    }

    #[test]
    fn only_multiples_of_ten_are_valid_steps() {
        assert!(OpacityStep::new(0).is_none());
        assert!(OpacityStep::new(65).is_none());
        assert!(OpacityStep::new(110).is_none());
        let percents: Vec<u8> = OpacityStep::all().map(OpacityStep::percent).collect();
        assert_eq!(percents, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn check_marks_reflect_window_state() {
        let display = DisplaySettings {
            opacity: 0.3,
            stay_on_top: true,
            tooltip_enabled: false,
        };
        let entries = menu_entries(&display, Orientation::Vertical);

        assert!(matches!(
            &entries[0],
            MenuEntry::Toggle { checked: true, action: MenuAction::ToggleStayOnTop, .. }
        ));
        assert!(matches!(
            &entries[1],
            MenuEntry::Toggle { checked: true, action: MenuAction::ToggleOrientation, .. }
        ));
        assert!(matches!(
            &entries[2],
            MenuEntry::Toggle { checked: false, action: MenuAction::ToggleTooltip, .. }
        ));

        let MenuEntry::Submenu { entries: opacity, .. } = &entries[3] else {
            panic!("opacity submenu missing");
        };
        let checked: Vec<&str> = opacity
            .iter()
            .filter_map(|e| match e {
                MenuEntry::Toggle {
                    label,
                    checked: true,
                    ..
                } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(checked, vec!["30%"]);
    }

    #[test]
    fn menu_ends_with_exit() {
        let entries = menu_entries(&DisplaySettings::default(), Orientation::Horizontal);
        assert_eq!(
            entries.last(),
            Some(&MenuEntry::Item {
                label: "Exit".into(),
                action: MenuAction::Exit
            })
        );
    }
}
