use defi_scope::{Cli, Panel, run, selected_chains};
use defi_scope::Blockchain;
use serde_json::Value;

fn offline(panel: Panel) -> Cli {
    Cli {
        panel,
        offline: true,
        no_latency: true,
        seed: Some(5),
        ..Cli::default()
    }
}

#[tokio::test]
async fn renders_every_panel_offline() {
    let output = run(&offline(Panel::All)).await.unwrap();
    for title in [
        "TVL by chain",
        "Gas fees (USD)",
        "Daily transactions (1m)",
        "Top protocols (simulated)",
        "TVL by contract language",
    ] {
        assert!(output.contains(title), "missing section {}", title);
    }
}

#[tokio::test]
async fn json_transactions_respect_range_and_chain_filter() {
    let args = Cli {
        json: true,
        range: "6m".into(),
        chains: vec!["base".into(), "Solana".into()],
        ..offline(Panel::Transactions)
    };
    let output = run(&args).await.unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();
    let transactions = &value["transactions"];
    assert_eq!(transactions["range"], "6m");
    let records = transactions["records"].as_array().unwrap();
    assert_eq!(records.len(), 180);
    let first = records[0].as_object().unwrap();
    assert!(first.contains_key("Base"));
    assert!(first.contains_key("Solana"));
    assert!(!first.contains_key("Ethereum"));
    assert!(value.get("tvl").is_none());
}

#[tokio::test]
async fn json_tvl_carries_its_source() {
    let args = Cli {
        json: true,
        ..offline(Panel::Tvl)
    };
    let value: Value = serde_json::from_str(&run(&args).await.unwrap()).unwrap();
    assert_eq!(value["tvl"]["source"]["kind"], "live");
    assert_eq!(value["tvl"]["entries"].as_array().unwrap().len(), 5);
}

#[test]
fn chain_names_parse_loosely() {
    let chains = selected_chains(&["ethereum".into(), " BNB ".into(), "Ethereum".into()])
        .unwrap()
        .unwrap();
    assert_eq!(chains, vec![Blockchain::Ethereum, Blockchain::BNBChain]);
    assert!(selected_chains(&[]).unwrap().is_none());
    assert!(selected_chains(&["Dogechain".into()]).is_err());
}
