use {
    crate::domain::Blockchain,
    chrono::NaiveDate,
    serde::Serialize,
    std::collections::BTreeMap,
};

/// One row of the daily transactions chart: `{ "date": ..., "<Chain>": count, ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub counts: BTreeMap<Blockchain, u64>,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            counts: BTreeMap::new(),
        }
    }

    pub fn get(&self, chain: Blockchain) -> Option<u64> {
        self.counts.get(&chain).copied()
    }

    pub fn chains(&self) -> impl Iterator<Item = Blockchain> + '_ {
        self.counts.keys().copied()
    }

    /// Copy of this row keeping only `enabled` chains (the chart's legend toggles).
    pub fn filtered(&self, enabled: &[Blockchain]) -> Self {
        Self {
            date: self.date,
            counts: self
                .counts
                .iter()
                .filter(|(chain, _)| enabled.contains(chain))
                .map(|(chain, count)| (*chain, *count))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtered_drops_disabled_chains() {
        let mut record = DayRecord::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        record.counts.insert(Blockchain::Ethereum, 10);
        record.counts.insert(Blockchain::Base, 20);
        let only_base = record.filtered(&[Blockchain::Base, Blockchain::Tron]);
        assert_eq!(only_base.get(Blockchain::Base), Some(20));
        assert_eq!(only_base.get(Blockchain::Ethereum), None);
        assert_eq!(only_base.chains().count(), 1);
    }

    #[test]
    fn serializes_flat() {
        let mut record = DayRecord::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        record.counts.insert(Blockchain::BNBChain, 7);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2025-03-01");
        assert_eq!(json["BNBChain"], 7);
    }
}
