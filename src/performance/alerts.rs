//! Below-target alerts.

use super::{CallerScope, ReportSettings, summary::ShopSummary};

/// One message per summary whose cash-in is below the target.
///
/// Staff reports name the shop; a single-shop report addresses the caller.
pub fn alerts(
    summaries: &[ShopSummary],
    scope: &CallerScope,
    settings: &ReportSettings,
) -> Vec<String> {
    let target = settings.target_amount.normalize();
    let symbol = &settings.currency_symbol;

    summaries
        .iter()
        .filter(|summary| summary.below_target)
        .map(|summary| match scope {
            CallerScope::AllShops => format!(
                "{}: Sales are below the target of {} {}.",
                summary.shop_name, symbol, target
            ),
            CallerScope::SingleShop(_) => format!(
                "Sales for your shop are below the target of {} {}.",
                symbol, target
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shop::Shop;
    use crate::performance::summary::summarize;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn shop(name: &str) -> Shop {
        Shop {
            id: Uuid::new_v4(),
            name: name.to_string(),
            location: String::new(),
        }
    }

    fn settings() -> ReportSettings {
        ReportSettings {
            target_amount: Decimal::from(30_000),
            currency_symbol: "KSH".to_string(),
        }
    }

    #[test]
    fn test_all_shops_alert_names_the_shop() {
        let summaries = vec![summarize(&shop("B"), &[], Decimal::from(30_000))];

        let messages = alerts(&summaries, &CallerScope::AllShops, &settings());

        assert_eq!(messages, vec!["B: Sales are below the target of KSH 30000."]);
    }

    #[test]
    fn test_single_shop_alert_is_first_person() {
        let own = shop("Cyber");
        let summaries = vec![summarize(&own, &[], Decimal::from(30_000))];

        let messages = alerts(&summaries, &CallerScope::SingleShop(own), &settings());

        assert_eq!(
            messages,
            vec!["Sales for your shop are below the target of KSH 30000."]
        );
    }

    #[test]
    fn test_no_alert_when_target_is_not_positive() {
        let summaries = vec![summarize(&shop("B"), &[], Decimal::ZERO)];
        let settings = ReportSettings {
            target_amount: Decimal::ZERO,
            currency_symbol: "KSH".to_string(),
        };

        assert!(alerts(&summaries, &CallerScope::AllShops, &settings).is_empty());
    }

    #[test]
    fn test_target_with_trailing_zero_decimals_prints_plainly() {
        let summaries = vec![summarize(&shop("B"), &[], Decimal::new(3_000_000, 2))];
        let settings = ReportSettings {
            target_amount: Decimal::new(3_000_000, 2),
            currency_symbol: "KSH".to_string(),
        };

        let messages = alerts(&summaries, &CallerScope::AllShops, &settings);

        assert_eq!(messages, vec!["B: Sales are below the target of KSH 30000."]);
    }
}
