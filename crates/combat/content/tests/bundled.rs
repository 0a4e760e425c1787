use std::fs;

use combat_content::ContentFactory;
use combat_core::{
    CombatConfig, CombatMode, CombatResult, CombatSession, Combatant, EquipSlot, ItemId, Phase,
    PlayerState, ScriptedRng, StatKind,
};

#[test]
fn bundled_content_is_complete() {
    let bundle = ContentFactory::bundled().load_all().unwrap();

    assert_eq!(bundle.config, CombatConfig::default());
    assert_eq!(bundle.enemies.len(), 11);
    assert_eq!(bundle.skills.len(), 3);
    assert_eq!(bundle.catalog.sets().count(), 3);

    for template in bundle.enemies.templates() {
        for drop in &template.drops {
            assert!(bundle.catalog.contains(drop), "{} drops unknown {}", template.id, drop);
        }
    }
    for set in bundle.catalog.sets() {
        for piece in &set.pieces {
            assert!(bundle.catalog.contains(piece), "set {} lists unknown {}", set.id, piece);
        }
    }

    let bosses: Vec<&str> = bundle
        .enemies
        .templates()
        .filter(|t| t.is_boss)
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(bosses, ["balrog", "cave_troll"]);
    assert_eq!(bundle.skills.get(2).map(|s| s.mode), Some(CombatMode::Magic));
}

#[test]
fn mithril_set_completes_on_the_bundled_catalog() {
    let bundle = ContentFactory::bundled().load_all().unwrap();
    let mut player = PlayerState::fresh("hero", bundle.catalog.clone());
    let coat = ItemId::from("mithril_coat");
    let helm = ItemId::from("mithril_helm");
    assert!(player.inventory.add_item(&coat));
    assert!(player.inventory.add_item(&helm));
    player.inventory.equip(&coat).unwrap();
    player.inventory.equip(&helm).unwrap();

    assert_eq!(player.inventory.equipped(EquipSlot::Armor), Some(&coat));
    // coat 12 + helm 7 + set 8
    assert_eq!(player.inventory.total_defense(), 27);
    assert_eq!(player.inventory.stat_bonus(StatKind::Str), 4);
    assert_eq!(player.total_defense(), 3 + 27);
}

#[test]
fn data_directory_overrides_bundled_content() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[timing]\nintro = 1\n\n[balance]\nflee_chance = 100\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("items.ron"),
        r#"(items: [(id: "miruvor", name: "Miruvor", kind: Consumable((heal: 40)), stackable: true)])"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("enemies.ron"),
        r#"(enemies: [(id: "rat", max_hp: 5, atk_damage: 1, xp_reward: 2, gold_reward: 1)])"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("skills.ron"),
        r#"(skills: [(id: "slash", mode: Melee)])"#,
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let bundle = factory.load_all().unwrap();
    assert_eq!(bundle.config.timing.intro, 1);
    assert_eq!(bundle.config.timing.attack, 30);
    assert_eq!(bundle.config.balance.flee_chance, 100);
    assert_eq!(bundle.catalog.len(), 1);
    assert_eq!(bundle.enemies.ids().collect::<Vec<_>>(), ["rat"]);
    assert_eq!(bundle.skills.len(), 1);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "").unwrap();

    let err = ContentFactory::new(dir.path()).load_all().unwrap_err();
    assert!(err.to_string().contains("items.ron"));
}

#[test]
fn bundled_goblin_falls_to_one_attack() {
    let bundle = ContentFactory::bundled().load_all().unwrap();
    let mut player = PlayerState::fresh("hero", bundle.catalog.clone());
    let mut goblin = bundle.enemies.spawn("goblin").unwrap();

    let result = {
        let mut session = CombatSession::start(&mut player, &mut goblin, ScriptedRng::never())
            .with_config(bundle.config.clone())
            .with_skills(bundle.skills.clone());
        for _ in 0..2000 {
            if session.result().is_some() {
                break;
            }
            if session.phase() == Phase::PlayerChoose {
                session.submit_confirm();
            }
            session.tick();
        }
        session.result()
    };

    assert_eq!(result, Some(CombatResult::Win));
    assert!(player.inventory.has_item(&ItemId::from("goblin_ear")));
    assert_eq!(player.stats.xp, 10);
    assert_eq!(player.inventory.gold, 5);
}
