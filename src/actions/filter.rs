//! Menu filtering.
//!
//! Decides which menu actions are shown, from `display_menu_services` and
//! `display_menu_exceptions`.

use std::collections::HashSet;

use crate::config::{DisplayMode, MenuSettings};

use super::registry::{Action, ActionId, ActionRegistry};

/// The actions to show, plus any warnings about the settings.
#[derive(Debug)]
pub struct VisibleActions<'r> {
    /// Actions to show, in registry order.
    pub actions: Vec<&'r Action>,
    /// Problems found in the settings, to be shown to the user.
    pub warnings: Vec<String>,
}

/// Resolve exception names to identifiers.
///
/// Names that match no action are dropped; they can't be shown anyway.
pub fn resolve_exceptions(names: &[String]) -> HashSet<ActionId> {
    names
        .iter()
        .filter_map(|name| match name.parse::<ActionId>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!("Ignoring menu exception: {}", e);
                None
            }
        })
        .collect()
}

/// Compute the visible subset of `registry`'s menu actions.
pub fn visible_actions<'r>(
    registry: &'r ActionRegistry,
    settings: &MenuSettings,
) -> VisibleActions<'r> {
    let exceptions = resolve_exceptions(&settings.exceptions);
    let mut warnings = Vec::new();

    if let DisplayMode::Unrecognized(value) = &settings.display {
        warnings.push(format!(
            "Invalid display_menu_services setting '{}' in config. Defaulting to 'all'.",
            value
        ));
    }

    let actions: Vec<&Action> = registry
        .menu_actions()
        .filter(|a| match &settings.display {
            DisplayMode::All | DisplayMode::Unrecognized(_) => true,
            DisplayMode::AllExcept => !exceptions.contains(&a.id),
            DisplayMode::NoneExcept => exceptions.contains(&a.id),
        })
        .collect();
    tracing::debug!(
        "Menu shows {:?}",
        actions.iter().map(|a| a.id.as_str()).collect::<Vec<_>>()
    );

    VisibleActions { actions, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(display: DisplayMode, exceptions: &[&str]) -> MenuSettings {
        MenuSettings {
            display,
            exceptions: exceptions.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ids(visible: &VisibleActions<'_>) -> Vec<ActionId> {
        visible.actions.iter().map(|a| a.id).collect()
    }

    #[test]
    fn all_shows_every_menu_action() {
        let registry = ActionRegistry::builtin();
        let visible = visible_actions(&registry, &settings(DisplayMode::All, &[]));

        assert_eq!(visible.actions.len(), registry.menu_actions().count());
        assert!(visible.warnings.is_empty());
    }

    #[test]
    fn all_ignores_exceptions() {
        let registry = ActionRegistry::builtin();
        let visible = visible_actions(&registry, &settings(DisplayMode::All, &["install"]));
        assert_eq!(visible.actions.len(), 5);
    }

    #[test]
    fn all_except_removes_listed_action() {
        let registry = ActionRegistry::builtin();
        let visible = visible_actions(&registry, &settings(DisplayMode::AllExcept, &["remove"]));

        assert_eq!(
            ids(&visible),
            vec![
                ActionId::Update,
                ActionId::Install,
                ActionId::CheckOutdated,
                ActionId::ListInstalled
            ]
        );
    }

    #[test]
    fn none_except_shows_only_listed_actions_in_registry_order() {
        let registry = ActionRegistry::builtin();
        let visible = visible_actions(
            &registry,
            &settings(DisplayMode::NoneExcept, &["list_installed", "update"]),
        );

        assert_eq!(ids(&visible), vec![ActionId::Update, ActionId::ListInstalled]);
    }

    #[test]
    fn none_except_intersects_with_registry() {
        let registry = ActionRegistry::builtin();
        let visible = visible_actions(
            &registry,
            &settings(DisplayMode::NoneExcept, &["install", "not_an_action"]),
        );

        assert_eq!(ids(&visible), vec![ActionId::Install]);
    }

    #[test]
    fn none_except_cannot_reveal_hidden_actions() {
        let registry = ActionRegistry::builtin();
        let visible = visible_actions(
            &registry,
            &settings(DisplayMode::NoneExcept, &["upgrade_outdated"]),
        );

        assert!(visible.actions.is_empty());
    }

    #[test]
    fn none_except_without_exceptions_is_empty() {
        let registry = ActionRegistry::builtin();
        let visible = visible_actions(&registry, &settings(DisplayMode::NoneExcept, &[]));
        assert!(visible.actions.is_empty());
    }

    #[test]
    fn legacy_exception_names_are_honored() {
        let registry = ActionRegistry::builtin();
        let visible = visible_actions(
            &registry,
            &settings(
                DisplayMode::AllExcept,
                &["remove_packages", "list_installed_packages"],
            ),
        );

        assert_eq!(
            ids(&visible),
            vec![ActionId::Update, ActionId::Install, ActionId::CheckOutdated]
        );
    }

    #[test]
    fn unrecognized_mode_falls_back_to_all_with_warning() {
        let registry = ActionRegistry::builtin();
        let visible = visible_actions(
            &registry,
            &settings(DisplayMode::Unrecognized("some".into()), &["install"]),
        );

        assert_eq!(visible.actions.len(), 5);
        assert_eq!(visible.warnings.len(), 1);
        assert!(visible.warnings[0].contains("Defaulting to 'all'"));
    }

    #[test]
    fn resolve_exceptions_drops_unknown_names() {
        let names = vec!["install".to_string(), "bogus".to_string()];
        let resolved = resolve_exceptions(&names);
        assert_eq!(resolved.len(), 1);
        assert!(resolved.contains(&ActionId::Install));
    }
}
