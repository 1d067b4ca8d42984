//! 商品目录服务

use super::model::{Product, PRODUCTS};

/// 只读目录，数据来自编译期常量
#[derive(Debug, Clone, Copy)]
pub struct CatalogService {
    products: &'static [Product],
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(&PRODUCTS)
    }
}

impl CatalogService {
    pub const fn new(products: &'static [Product]) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    /// 去重后的分类，保持首次出现的顺序
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories = Vec::new();
        for product in self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }
}
