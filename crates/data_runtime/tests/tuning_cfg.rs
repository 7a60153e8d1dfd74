use data_runtime::configs::tuning::TuningCfg;

#[test]
fn load_tuning_toml() {
    let cfg = TuningCfg::load_default().expect("load data/config/tuning.toml");
    assert!(cfg.arena.width > 0.0 && cfg.arena.height > 0.0);
    assert_eq!(cfg.player.health, 100.0);
    assert_eq!(cfg.demon.health, 1000.0);
    assert_eq!(cfg.spawner.min_sum_gap, 120.0);
    assert!(cfg.spawner.max_attempts > 0, "retry cap must be bounded");
}
