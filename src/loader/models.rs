use serde::Deserialize;

// Export header (second physical line of the file):
//  N° do imóvel ; UF ; Cidade ; Bairro ; Endereço ; Preço ; Valor de avaliação ;
//  Desconto ; Descrição ; Modalidade de venda ; Link de acesso
//
// Only the columns below are read; the rest are ignored.

/// One row of the listing export, exactly as text.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RawListing {
    #[serde(rename = "N° do imóvel")]
    pub listing_number: Option<String>,
    #[serde(rename = "UF")]
    pub state: String,
    #[serde(rename = "Cidade")]
    pub city: String,
    #[serde(rename = "Bairro")]
    pub neighborhood: String,
    #[serde(rename = "Endereço")]
    pub address: Option<String>,
    #[serde(rename = "Preço")]
    pub price: String,
    #[serde(rename = "Valor de avaliação")]
    pub appraisal_value: String,
    #[serde(rename = "Descrição")]
    pub description: String,
}
