//! Promotion-aware pricing of service occurrences.
//!
//! A session may contain the same service several times; the promotion
//! scope decides which of those occurrences are discounted. Occurrence
//! indexes count in *selection order* (the order services were added to the
//! session), never in assignment order, so scheduling a later-selected
//! occurrence first cannot steal a VIP discount.

use rust_decimal::Decimal;

use crate::models::{PromotionScope, Service};

/// Price charged for one occurrence of a service.
///
/// `occurrence_index` is the zero-based position of this occurrence among
/// the session's selections of the same service ID, in selection order.
///
/// - [`PromotionScope::None`]: base price, regardless of index.
/// - [`PromotionScope::All`]: every occurrence is discounted.
/// - [`PromotionScope::Vip`]: only occurrence 0 is discounted; repeats of
///   the same service are charged in full.
pub fn price_of(service: &Service, occurrence_index: usize) -> Decimal {
    let discounted = match service.promotion {
        PromotionScope::None => false,
        PromotionScope::All => true,
        PromotionScope::Vip => occurrence_index == 0,
    };

    if discounted {
        discounted_price(service.price, service.discount())
    } else {
        service.price
    }
}

/// Applies a percentage discount, rounded to 2 decimals and floored at zero.
fn discounted_price(base: Decimal, percentage: u8) -> Decimal {
    let factor = (Decimal::ONE_HUNDRED - Decimal::from(percentage)) / Decimal::ONE_HUNDRED;
    (base * factor).round_dp(2).max(Decimal::ZERO)
}

/// Prices every occurrence of an ordered service selection.
///
/// The result is parallel to `selection`: entry `i` is the charged price of
/// `selection[i]`, with per-service occurrence indexes derived from the
/// selection order. Unknown service IDs are skipped by the caller before
/// this point; `selection` entries must all resolve within `services`.
pub fn occurrence_prices(services: &[Service], selection: &[u64]) -> Vec<Decimal> {
    let mut seen: Vec<u64> = Vec::with_capacity(selection.len());
    selection
        .iter()
        .map(|&service_id| {
            let index = seen.iter().filter(|&&id| id == service_id).count();
            seen.push(service_id);
            services
                .iter()
                .find(|s| s.id == service_id)
                .map(|s| price_of(s, index))
                .unwrap_or(Decimal::ZERO)
        })
        .collect()
}

/// Total charged price of an ordered service selection.
pub fn total_price(services: &[Service], selection: &[u64]) -> Decimal {
    occurrence_prices(services, selection).iter().sum()
}
