//! Process-wide selection tests
//!
//! All tests here share one global registry, so each takes `SERIAL` first.

use doge_params::{
    params, select_params, select_params_from_flags, try_params, Base58Type, ChainParams, Error,
    Network, NetworkFlags, Registry,
};
use parking_lot::Mutex;

static SERIAL: Mutex<()> = Mutex::new(());

#[test]
fn test_round_trip_each_network() {
    let _guard = SERIAL.lock();

    for network in Network::ALL {
        select_params(network);
        assert_eq!(params().network_id(), network);
        assert_eq!(Registry::global().network(), Some(network));
    }
}

#[test]
fn test_invalid_combination_keeps_previous_selection() {
    let _guard = SERIAL.lock();

    select_params(Network::Testnet);
    let both = NetworkFlags { testnet: true, regtest: true };
    assert_eq!(select_params_from_flags(&both).unwrap_err(), Error::InvalidNetworkCombination);
    assert_eq!(params().network_id(), Network::Testnet);
}

#[test]
fn test_flag_policy() {
    let _guard = SERIAL.lock();

    select_params_from_flags(&NetworkFlags::from_args(Vec::<String>::new())).unwrap();
    assert_eq!(params().network_id(), Network::Main);

    select_params_from_flags(&NetworkFlags::from_args(["-testnet"])).unwrap();
    assert_eq!(params().network_id(), Network::Testnet);

    select_params_from_flags(&NetworkFlags::from_args(["-regtest"])).unwrap();
    assert_eq!(params().network_id(), Network::Regtest);
}

#[test]
fn test_legacy_spellings_drive_global_selection() {
    let _guard = SERIAL.lock();

    select_params(Network::Main);
    let select = |args: &[&str]| select_params_from_flags(&NetworkFlags::from_args(args.iter().copied()));

    assert_eq!(select(&["-testnet"]).unwrap().network_id(), Network::Testnet);
    assert_eq!(select(&["-regtest"]).unwrap().network_id(), Network::Regtest);
    assert_eq!(select(&["-testnet", "-regtest"]).unwrap_err(), Error::InvalidNetworkCombination);
    assert_eq!(params().network_id(), Network::Regtest);

    let (flags, rest) = NetworkFlags::split_args(["--format", "json", "-testnet"]);
    assert_eq!(rest, vec!["--format", "json"]);
    assert_eq!(select_params_from_flags(&flags).unwrap().network_id(), Network::Testnet);
}

#[test]
fn test_main_then_regtest_scenario() {
    let _guard = SERIAL.lock();

    select_params(Network::Main);
    let main = try_params().unwrap();
    assert_eq!(main.default_port(), 22556);
    assert!(main.require_standard());

    select_params(Network::Regtest);
    let regtest = params();
    assert!(!regtest.mining_requires_peers());
    assert!(regtest.allow_min_difficulty_blocks());
}

#[test]
fn test_every_variant_is_complete() {
    for network in Network::ALL {
        let params = ChainParams::for_network(network);

        assert!(params.target_spacing() > 0);
        assert_eq!(params.interval(), params.target_timespan() / params.target_spacing());
        assert_eq!(
            params.digishield_interval(),
            params.digishield_target_timespan() / params.target_spacing()
        );
        assert!(params.interval() > 0);
        assert!(params.digishield_interval() > 0);

        assert_eq!(params.base58_prefixes().len(), Base58Type::COUNT);
        for kind in Base58Type::ALL {
            assert!(!params.base58_prefix(kind).is_empty(), "{network} {kind:?}");
        }

        assert!(!params.alert_key().is_empty());
        assert!(!params.proof_of_work_limit().is_zero());
        assert!(params.enforce_block_upgrade_majority() < params.reject_block_outdated_majority());
        assert!(params.reject_block_outdated_majority() <= params.to_check_block_upgrade_majority());
    }
}

#[test]
fn test_message_starts_pairwise_distinct() {
    let markers: Vec<_> = Network::ALL
        .iter()
        .map(|n| *ChainParams::for_network(*n).message_start())
        .collect();
    for i in 0..markers.len() {
        for j in (i + 1)..markers.len() {
            assert_ne!(markers[i], markers[j]);
        }
    }
}

#[test]
fn test_genesis_is_stable_across_reads() {
    for network in Network::ALL {
        let first = ChainParams::for_network(network).genesis_block();
        let second = ChainParams::for_network(network).genesis_block();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }
}

#[test]
fn test_summary_serializes() {
    let params = ChainParams::for_network(Network::Testnet);
    let json = serde_json::to_value(params.summary()).unwrap();

    assert_eq!(json["network"], "test");
    assert_eq!(json["network"], Network::Testnet.to_string());
    assert_eq!(json["message_start"], "fcc1b7dc");
    assert_eq!(json["default_port"], 44556);
    assert_eq!(json["rpc_is_testnet"], true);
    assert_eq!(json["base58_prefixes"]["pubkey_address"], "71");
    assert_eq!(
        json["genesis_hash"],
        "bb0a78264637406b6360aad926284d544d7049f45189db5664f3c4d07350559e"
    );
}
