mod common;

use common::{context, plan_request, request, utf8_tempdir, write_tree};
use mc_installer_lib::config::InstallerConfig;
use mc_installer_lib::core::preferences::FixedPreference;
use mc_installer_lib::core::registry::{InstallerRegistry, DEFAULT_PRIORITY};
use mc_installer_lib::models::install_type::InstallTypeId;
use mc_installer_lib::models::instruction::InstallInstruction;

#[test]
fn test_minecraft_registry_order() {
    let registry = InstallerRegistry::minecraft();
    let order: Vec<InstallTypeId> = registry.registrations().iter().map(|r| r.type_id).collect();
    assert_eq!(
        order,
        vec![
            InstallTypeId::DefaultMod,
            InstallTypeId::DataPack,
            InstallTypeId::ShaderPack,
            InstallTypeId::ResourcePack,
        ]
    );
    assert!(registry.registrations().iter().all(|r| r.priority == DEFAULT_PRIORITY));
}

#[test]
fn test_lower_priority_value_runs_first() {
    let mut registry = InstallerRegistry::new();
    registry
        .register(InstallTypeId::ResourcePack, 25)
        .register(InstallTypeId::DataPack, 10)
        .register(InstallTypeId::ShaderPack, 25);
    let order: Vec<InstallTypeId> = registry.registrations().iter().map(|r| r.type_id).collect();
    assert_eq!(
        order,
        vec![InstallTypeId::DataPack, InstallTypeId::ResourcePack, InstallTypeId::ShaderPack]
    );
}

#[test]
fn test_resolve_picks_first_match() {
    let registry = InstallerRegistry::minecraft();
    let config = InstallerConfig::default();

    let data_pack = request(&["pack.mcmeta", "data/ns/tags/x.json"], "Dp.zip");
    assert_eq!(registry.resolve(&data_pack, &config), Some(InstallTypeId::DataPack));

    let resource_pack = request(&["pack.mcmeta", "assets/minecraft/a.png"], "Rp.zip");
    assert_eq!(registry.resolve(&resource_pack, &config), Some(InstallTypeId::ResourcePack));

    let shaders = request(&["shaders/final.fsh"], "Shaders.zip");
    assert_eq!(registry.resolve(&shaders, &config), Some(InstallTypeId::ShaderPack));

    let jar = request(&["CoolMod.jar"], "CoolMod.jar");
    assert_eq!(registry.resolve(&jar, &config), Some(InstallTypeId::DefaultMod));

    let nothing = request(&["readme.txt"], "Docs.7z");
    assert_eq!(registry.resolve(&nothing, &config), None);
}

#[tokio::test]
async fn test_install_resolves_and_plans() {
    let (_tmp, dest) = utf8_tempdir();
    write_tree(&dest, &[("shaders/final.fsh", b"void main() {}")]);
    let registry = InstallerRegistry::minecraft();
    let config = InstallerConfig::default();
    let prefs = FixedPreference::extract();

    let entries = ["shaders/", "shaders/final.fsh"];
    let plan = registry
        .install(
            &request(&entries, "Shaders.zip"),
            &plan_request(&entries, &dest, "Shaders.zip"),
            &context(&config, &prefs),
        )
        .await
        .unwrap()
        .expect("shader pack should be accepted");

    assert_eq!(plan.mod_type(), InstallTypeId::ShaderPack);
    assert_eq!(
        plan.instructions()[0],
        InstallInstruction::SetModType {
            value: InstallTypeId::ShaderPack
        }
    );
}

#[tokio::test]
async fn test_install_returns_none_for_other_games() {
    let (_tmp, dest) = utf8_tempdir();
    let registry = InstallerRegistry::minecraft();
    let config = InstallerConfig::default();
    let prefs = FixedPreference::extract();

    let mut req = request(&["CoolMod.jar"], "CoolMod.jar");
    req.game_id = "other-game".to_string();
    let result = registry
        .install(
            &req,
            &plan_request(&["CoolMod.jar"], &dest, "CoolMod.jar"),
            &context(&config, &prefs),
        )
        .await
        .unwrap();
    assert!(result.is_none());
}
