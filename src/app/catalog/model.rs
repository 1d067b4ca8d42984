//! 商品数据模型

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub price: f64,
    pub category: &'static str,
    pub available: bool,
}

pub static PRODUCTS: [Product; 1] = [Product {
    id: "60d5ecb74f8a8b001f5e4e1a",
    title: "Expresso Cappuccino",
    description: &["cappuccino"],
    price: 8.50,
    category: "Drinks",
    available: true,
}];
