//! Hand-checked sales fixture shared by the d100 tests.
//!
//! 10 records, states SP/RJ, months 2022-01/2022-02, categories
//! livros/eletronicos, sellers Ana/Bruno/Carla.
//!
//! Expected tables:
//! - states: SP 675.0, RJ 650.0
//! - months: 2022-01-31 775.0, 2022-02-28 550.0
//! - categories: eletronicos 1025.0, livros 300.0
//! - sellers: Ana 487.5 / 4, Bruno 725.0 / 3, Carla 112.5 / 3
//! - total 1325.0

use contracts::dashboards::d100_sales::{parse_purchase_date, SaleRecord};

pub const SP: (f64, f64) = (-22.19, -48.79);
pub const RJ: (f64, f64) = (-22.25, -42.66);

pub fn sale(
    date: &str,
    price: f64,
    category: &str,
    state: &str,
    (lat, lon): (f64, f64),
    seller: &str,
) -> SaleRecord {
    SaleRecord {
        purchase_date: parse_purchase_date(date).unwrap(),
        price,
        category: category.to_string(),
        state: state.to_string(),
        lat,
        lon,
        seller: seller.to_string(),
    }
}

pub fn ten_sales() -> Vec<SaleRecord> {
    vec![
        sale("05/01/2022", 100.0, "livros", "SP", SP, "Ana"),
        sale("10/01/2022", 200.0, "eletronicos", "SP", SP, "Bruno"),
        sale("15/01/2022", 50.0, "livros", "RJ", RJ, "Ana"),
        sale("20/01/2022", 25.0, "livros", "SP", SP, "Carla"),
        sale("31/01/2022", 400.0, "eletronicos", "RJ", RJ, "Bruno"),
        sale("01/02/2022", 12.5, "livros", "SP", SP, "Carla"),
        sale("14/02/2022", 300.0, "eletronicos", "SP", SP, "Ana"),
        // later RJ row with drifted coordinates, the first occurrence wins
        sale("15/02/2022", 75.0, "livros", "RJ", (-22.0, -43.0), "Carla"),
        sale("28/02/2022", 125.0, "eletronicos", "RJ", RJ, "Bruno"),
        sale("28/02/2022", 37.5, "livros", "SP", SP, "Ana"),
    ]
}

/// Upstream JSON body for the first three fixture rows
pub const UPSTREAM_JSON: &str = r#"[
    {"Produto": "Iniciando em programação", "Categoria do Produto": "livros",
     "Preço": 100.0, "Frete": 3.2, "Data da Compra": "05/01/2022",
     "Vendedor": "Ana", "Local da compra": "SP", "Avaliação da compra": 5,
     "Tipo de pagamento": "boleto", "Quantidade de parcelas": 1,
     "lat": -22.19, "lon": -48.79},
    {"Produto": "Celular ABXY", "Categoria do Produto": "eletronicos",
     "Preço": 200.0, "Frete": 10.0, "Data da Compra": "10/01/2022",
     "Vendedor": "Bruno", "Local da compra": "SP", "Avaliação da compra": 4,
     "Tipo de pagamento": "cartao_credito", "Quantidade de parcelas": 8,
     "lat": -22.19, "lon": -48.79},
    {"Produto": "Dashboards com Power BI", "Categoria do Produto": "livros",
     "Preço": 50.0, "Frete": 1.5, "Data da Compra": "15/01/2022",
     "Vendedor": "Ana", "Local da compra": "RJ", "Avaliação da compra": 3,
     "Tipo de pagamento": "cartao_credito", "Quantidade de parcelas": 2,
     "lat": -22.25, "lon": -42.66}
]"#;
