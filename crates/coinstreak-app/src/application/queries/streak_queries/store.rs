use log::{info, warn};

use crate::application::dtos::{ProductDto, StoreCatalogDto};
use coinstreak_domain::shared::DomainError;
use coinstreak_domain::store::{filter_products, CategoryFilter, Product};

pub(super) fn build_store_catalog(
    products: &[Product],
    filter: CategoryFilter,
    balance: u32,
) -> Result<StoreCatalogDto, DomainError> {
    let selected: Vec<ProductDto> = filter_products(products, filter)
        .into_iter()
        .map(|product| ProductDto::new(product, balance))
        .collect();

    if selected.is_empty() {
        warn!(
            "[streak] store query empty result filter={}",
            filter.as_str()
        );
    } else {
        info!(
            "[streak] store filter={} items={} affordable={}",
            filter.as_str(),
            selected.len(),
            selected.iter().filter(|p| p.affordable).count()
        );
    }

    Ok(StoreCatalogDto {
        filter: filter.as_str().to_string(),
        balance,
        total_count: products.len(),
        products: selected,
    })
}
