use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use slips_common::dataset::SalesData;
use slips_common::mock::{self, DEFAULT_RECEIPT_COUNT};
use slips_common::receipt::ReceiptError;

#[derive(Debug, Clone, Parser)]
#[command(name = "slips-node", about = "Serves mock receipts and sales figures as JSON")]
pub struct Config {
    /// HTTP port to listen on.
    #[arg(long, env = "SLIPS_PORT", default_value_t = 3010)]
    pub port: u16,

    /// Number of receipts to generate at startup.
    #[arg(long, env = "SLIPS_RECEIPTS", default_value_t = DEFAULT_RECEIPT_COUNT)]
    pub receipts: usize,

    /// Seed for reproducible data. Random when omitted.
    #[arg(long, env = "SLIPS_SEED")]
    pub seed: Option<u64>,
}

impl Config {
    /// Build the snapshot this node will serve for its whole lifetime.
    pub fn generate_data(&self) -> Result<SalesData, ReceiptError> {
        let now = chrono::Utc::now();
        match self.seed {
            Some(seed) => mock::generate_with(&mut StdRng::seed_from_u64(seed), now, self.receipts),
            None => mock::generate_with(&mut rand::thread_rng(), now, self.receipts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["slips-node"]).unwrap();
        assert_eq!(config.port, 3010);
        assert_eq!(config.receipts, DEFAULT_RECEIPT_COUNT);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn flags_override_defaults() {
        let config =
            Config::try_parse_from(["slips-node", "--port", "8080", "--receipts", "3", "--seed", "11"])
                .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.receipts, 3);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.generate_data().unwrap().receipts().len(), 3);
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Config::try_parse_from(["slips-node", "--port", "99999"]).is_err());
    }
}
