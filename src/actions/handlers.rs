//! Action handlers.
//!
//! Every handler first makes sure the package manager is present, then
//! reports what it is about to do and delegates to the package manager.

use crate::config::PackageList;
use crate::error::Result;
use crate::menu::{parse_choice, render_menu, Choice, OUTDATED_CHOICE_KEY};
use crate::package_manager::ensure_available;
use crate::ui::Prompt;

use super::registry::{ActionContext, ActionId};

const OUTDATED_MENU_ITEMS: [&str; 2] = ["Update All Packages", "Update Select Packages"];

fn prepare(ctx: &mut ActionContext<'_>) {
    ensure_available(ctx.manager, ctx.ui);
}

pub fn update(ctx: &mut ActionContext<'_>) -> Result<()> {
    prepare(ctx);
    let name = ctx.manager.display_name().to_string();
    ctx.ui.message(&format!("Updating {}...", name));
    ctx.manager.update()
}

/// Install then upgrade every package in `[install] packages`.
pub fn install(ctx: &mut ActionContext<'_>) -> Result<()> {
    prepare(ctx);
    let packages = &ctx.config.install;
    if packages.is_empty() {
        ctx.ui.message("No packages to Install.");
        return Ok(());
    }

    for package in packages.iter() {
        ctx.ui.message(&format!("Installing/updating {}...", package));
        ctx.manager.install(package)?;
        ctx.manager.upgrade(Some(package))?;
    }
    Ok(())
}

pub fn remove(ctx: &mut ActionContext<'_>) -> Result<()> {
    prepare(ctx);
    let packages = &ctx.config.remove;
    if packages.is_empty() {
        ctx.ui.message("No packages to remove.");
        return Ok(());
    }

    for package in packages.iter() {
        ctx.ui.message(&format!("Removing {}...", package));
        ctx.manager.uninstall(package)?;
    }
    Ok(())
}

/// List outdated packages and offer to upgrade them.
pub fn check_outdated(ctx: &mut ActionContext<'_>) -> Result<()> {
    prepare(ctx);
    ctx.ui.message("Checking for outdated packages...");

    let mut spinner = ctx.ui.start_spinner("Asking for outdated packages");
    let outdated = match ctx.manager.outdated() {
        Ok(outdated) => {
            spinner.finish_and_clear();
            outdated
        }
        Err(e) => {
            spinner.finish_error("Could not list outdated packages");
            return Err(e);
        }
    };

    if outdated.is_empty() {
        ctx.ui.success("All packages are up to date.");
        return Ok(());
    }

    ctx.ui
        .message(&format!("Outdated packages: {}", outdated.join(",")));
    outdated_menu(ctx)
}

fn outdated_menu(ctx: &mut ActionContext<'_>) -> Result<()> {
    let title = format!("{} Outdated Packages Menu", ctx.manager.display_name());
    ctx.ui.show_header(&title);
    for line in render_menu(&OUTDATED_MENU_ITEMS, "Main Menu") {
        ctx.ui.message(&line);
    }

    let input = ctx
        .ui
        .prompt(&Prompt::input(OUTDATED_CHOICE_KEY, "Enter your choice: "))?;

    match parse_choice(&input, OUTDATED_MENU_ITEMS.len()) {
        Choice::Action(0) => upgrade_all_outdated(ctx),
        Choice::Action(_) => {
            let config = ctx.config;
            upgrade_selected(ctx, &config.update_select)
        }
        Choice::Exit => Ok(()),
        Choice::NotANumber | Choice::OutOfRange(_) => {
            ctx.ui.warning("Invalid choice. Returning to main menu.");
            Ok(())
        }
    }
}

/// `upgrade` with no argument.
pub fn upgrade_all_outdated(ctx: &mut ActionContext<'_>) -> Result<()> {
    prepare(ctx);
    tracing::debug!("Running {}", ActionId::UpgradeOutdated);
    ctx.ui.message("Updating all outdated packages...");
    ctx.manager.upgrade(None)
}

/// Upgrade each package in `[update] update_select_packages`.
pub fn upgrade_selected(ctx: &mut ActionContext<'_>, packages: &PackageList) -> Result<()> {
    prepare(ctx);
    ctx.ui
        .message(&format!("Updating selected packages: {}", packages));
    if packages.is_empty() {
        ctx.ui.message("No Packages to Update.");
        return Ok(());
    }

    for package in packages.iter() {
        ctx.manager.upgrade(Some(package))?;
    }
    Ok(())
}

pub fn list_installed(ctx: &mut ActionContext<'_>) -> Result<()> {
    prepare(ctx);
    let name = ctx.manager.display_name().to_string();
    ctx.ui
        .message(&format!("Currently installed {} packages:", name));
    ctx.manager.list()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MenuConfig, PackageList};
    use crate::package_manager::{ManagerCall, RecordingManager};
    use crate::ui::MockUI;

    fn config_with_install(packages: &str) -> MenuConfig {
        MenuConfig {
            install: PackageList::parse(packages),
            ..Default::default()
        }
    }

    fn run(
        handler: fn(&mut ActionContext<'_>) -> Result<()>,
        config: &MenuConfig,
        manager: &mut RecordingManager,
        ui: &mut MockUI,
    ) -> Result<()> {
        let mut ctx = ActionContext {
            config,
            manager,
            ui,
        };
        handler(&mut ctx)
    }

    fn install_calls(names: &[&str]) -> Vec<ManagerCall> {
        names
            .iter()
            .flat_map(|n| {
                [
                    ManagerCall::Install(n.to_string()),
                    ManagerCall::Upgrade(Some(n.to_string())),
                ]
            })
            .collect()
    }

    #[test]
    fn update_runs_update() {
        let mut manager = RecordingManager::new();
        let mut ui = MockUI::new();

        run(update, &MenuConfig::default(), &mut manager, &mut ui).unwrap();

        assert_eq!(manager.calls(), [ManagerCall::Update]);
        assert!(ui.has_message("Updating Homebrew..."));
    }

    #[test]
    fn install_installs_then_upgrades_each_package_in_order() {
        let config = config_with_install("a,b,c");
        let mut manager = RecordingManager::new();
        let mut ui = MockUI::new();

        run(install, &config, &mut manager, &mut ui).unwrap();

        assert_eq!(manager.calls(), install_calls(&["a", "b", "c"]));
        assert_eq!(
            ui.messages(),
            [
                "Installing/updating a...",
                "Installing/updating b...",
                "Installing/updating c..."
            ]
        );
    }

    #[test]
    fn install_with_empty_list_makes_no_calls() {
        let config = config_with_install("");
        let mut manager = RecordingManager::new();
        let mut ui = MockUI::new();

        run(install, &config, &mut manager, &mut ui).unwrap();

        assert!(manager.calls().is_empty());
        assert!(ui.has_message("No packages to Install."));
    }

    #[test]
    fn install_stops_at_first_spawn_failure() {
        let config = config_with_install("a,b");
        let mut manager = RecordingManager::new().failing();
        let mut ui = MockUI::new();

        let result = run(install, &config, &mut manager, &mut ui);

        assert!(result.is_err());
        assert_eq!(manager.calls(), [ManagerCall::Install("a".into())]);
    }

    #[test]
    fn remove_uninstalls_each_package() {
        let config = MenuConfig {
            remove: PackageList::parse("node, python@3.9"),
            ..Default::default()
        };
        let mut manager = RecordingManager::new();
        let mut ui = MockUI::new();

        run(remove, &config, &mut manager, &mut ui).unwrap();

        assert_eq!(
            manager.calls(),
            [
                ManagerCall::Uninstall("node".into()),
                ManagerCall::Uninstall("python@3.9".into())
            ]
        );
        assert!(ui.has_message("Removing python@3.9..."));
    }

    #[test]
    fn remove_with_empty_list_makes_no_calls() {
        let mut manager = RecordingManager::new();
        let mut ui = MockUI::new();

        run(remove, &MenuConfig::default(), &mut manager, &mut ui).unwrap();

        assert!(manager.calls().is_empty());
        assert!(ui.has_message("No packages to remove."));
    }

    #[test]
    fn check_outdated_with_nothing_outdated() {
        let mut manager = RecordingManager::new();
        let mut ui = MockUI::new();

        run(check_outdated, &MenuConfig::default(), &mut manager, &mut ui).unwrap();

        assert_eq!(manager.calls(), [ManagerCall::Outdated]);
        assert!(ui.has_success("All packages are up to date."));
        assert!(ui.prompts_shown().is_empty());
        assert_eq!(ui.spinners().len(), 1);
    }

    #[test]
    fn check_outdated_update_all() {
        let mut manager = RecordingManager::new().with_outdated(vec!["git", "wget"]);
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(OUTDATED_CHOICE_KEY, vec!["1"]);

        run(check_outdated, &MenuConfig::default(), &mut manager, &mut ui).unwrap();

        assert!(ui.has_message("Outdated packages: git,wget"));
        assert_eq!(ui.headers(), ["Homebrew Outdated Packages Menu"]);
        assert!(ui.has_message("1. Update All Packages"));
        assert!(ui.has_message("3. Main Menu"));
        assert_eq!(
            manager.calls(),
            [ManagerCall::Outdated, ManagerCall::Upgrade(None)]
        );
    }

    #[test]
    fn check_outdated_update_selected_uses_configured_list() {
        let config = MenuConfig {
            update_select: PackageList::parse("git,jq"),
            ..Default::default()
        };
        let mut manager = RecordingManager::new().with_outdated(vec!["git"]);
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(OUTDATED_CHOICE_KEY, vec!["2"]);

        run(check_outdated, &config, &mut manager, &mut ui).unwrap();

        assert!(ui.has_message("Updating selected packages: git, jq"));
        assert_eq!(
            manager.calls(),
            [
                ManagerCall::Outdated,
                ManagerCall::Upgrade(Some("git".into())),
                ManagerCall::Upgrade(Some("jq".into()))
            ]
        );
    }

    #[test]
    fn check_outdated_update_selected_with_empty_list() {
        let mut manager = RecordingManager::new().with_outdated(vec!["git"]);
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(OUTDATED_CHOICE_KEY, vec!["2"]);

        run(check_outdated, &MenuConfig::default(), &mut manager, &mut ui).unwrap();

        assert!(ui.has_message("No Packages to Update."));
        assert_eq!(manager.calls(), [ManagerCall::Outdated]);
    }

    #[test]
    fn check_outdated_main_menu_does_nothing() {
        let mut manager = RecordingManager::new().with_outdated(vec!["git"]);
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(OUTDATED_CHOICE_KEY, vec!["3"]);

        run(check_outdated, &MenuConfig::default(), &mut manager, &mut ui).unwrap();

        assert_eq!(manager.calls(), [ManagerCall::Outdated]);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn check_outdated_invalid_choice_returns_with_warning() {
        let mut manager = RecordingManager::new().with_outdated(vec!["git"]);
        let mut ui = MockUI::new();
        ui.queue_prompt_responses(OUTDATED_CHOICE_KEY, vec!["x"]);

        run(check_outdated, &MenuConfig::default(), &mut manager, &mut ui).unwrap();

        assert_eq!(manager.calls(), [ManagerCall::Outdated]);
        assert!(ui.has_warning("Returning to main menu"));
    }

    #[test]
    fn list_installed_lists() {
        let mut manager = RecordingManager::new();
        let mut ui = MockUI::new();

        run(list_installed, &MenuConfig::default(), &mut manager, &mut ui).unwrap();

        assert_eq!(manager.calls(), [ManagerCall::List]);
        assert!(ui.has_message("Currently installed Homebrew packages:"));
    }

    #[test]
    fn handlers_bootstrap_missing_manager_first() {
        let mut manager = RecordingManager::new().unavailable();
        let mut ui = MockUI::new();

        run(update, &MenuConfig::default(), &mut manager, &mut ui).unwrap();

        assert_eq!(
            manager.calls(),
            [ManagerCall::Bootstrap, ManagerCall::Update]
        );
    }
}
