//! Supply chain verification (mocked)
//!
//! Each named input maps to a fixed supplier profile; the alternatives
//! search always recommends the same two replacements. Manufacturer and
//! seed supplier are required, the other two inputs are optional.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub location: &'static str,
    pub verified: bool,
    pub quality_score: u8,
    pub certifications: Vec<&'static str>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainInputs {
    pub manufacturer: String,
    pub seed_supplier: String,
    #[serde(default)]
    pub chemical_input: Option<String>,
    #[serde(default)]
    pub biochar_supplier: Option<String>,
}

/// Build the verification table for the provided inputs. Optional inputs
/// that are absent or blank contribute no row.
pub fn verify_chain(inputs: &SupplyChainInputs) -> Vec<Supplier> {
    let mut suppliers = Vec::new();

    if !inputs.manufacturer.is_empty() {
        suppliers.push(Supplier {
            name: inputs.manufacturer.clone(),
            kind: "Manufacturer",
            location: "Iowa, USA",
            verified: true,
            quality_score: 92,
            certifications: vec!["ISO 9001", "USDA Organic"],
        });
    }

    if !inputs.seed_supplier.is_empty() {
        suppliers.push(Supplier {
            name: inputs.seed_supplier.clone(),
            kind: "Seed Supplier",
            location: "Illinois, USA",
            verified: true,
            quality_score: 88,
            certifications: vec!["Non-GMO", "Certified Organic"],
        });
    }

    if let Some(chemical) = inputs.chemical_input.as_deref().filter(|s| !s.is_empty()) {
        suppliers.push(Supplier {
            name: chemical.to_string(),
            kind: "Chemical/Fertilizer",
            location: "Nebraska, USA",
            verified: false,
            quality_score: 65,
            certifications: vec!["EPA Registered"],
        });
    }

    if let Some(biochar) = inputs.biochar_supplier.as_deref().filter(|s| !s.is_empty()) {
        suppliers.push(Supplier {
            name: biochar.to_string(),
            kind: "Biochar Supplier",
            location: "California, USA",
            verified: true,
            quality_score: 95,
            certifications: vec!["Carbon Negative", "USDA Certified"],
        });
    }

    suppliers
}

/// The two recommended replacement suppliers.
pub fn alternatives() -> Vec<Supplier> {
    vec![
        Supplier {
            name: "GreenTech Fertilizers".to_string(),
            kind: "Chemical/Fertilizer",
            location: "Kansas, USA",
            verified: true,
            quality_score: 89,
            certifications: vec!["EPA Registered", "Organic Certified", "Carbon Neutral"],
        },
        Supplier {
            name: "EcoGrow Solutions".to_string(),
            kind: "Chemical/Fertilizer",
            location: "Missouri, USA",
            verified: true,
            quality_score: 91,
            certifications: vec!["EPA Registered", "USDA Organic", "B Corp"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_inputs() -> SupplyChainInputs {
        SupplyChainInputs {
            manufacturer: "John Deere".into(),
            seed_supplier: "Pioneer Seeds".into(),
            chemical_input: Some("Acme Fertilizers".into()),
            biochar_supplier: Some("Carbon Gold".into()),
        }
    }

    #[test]
    fn test_full_chain_produces_four_rows_in_order() {
        let suppliers = verify_chain(&full_inputs());
        assert_eq!(suppliers.len(), 4);
        assert_eq!(suppliers[0].kind, "Manufacturer");
        assert_eq!(suppliers[1].kind, "Seed Supplier");
        assert_eq!(suppliers[2].kind, "Chemical/Fertilizer");
        assert_eq!(suppliers[3].kind, "Biochar Supplier");
        // Only the chemical supplier is unverified.
        assert!(suppliers.iter().filter(|s| !s.verified).count() == 1);
        assert!(!suppliers[2].verified);
    }

    #[test]
    fn test_blank_optional_inputs_are_skipped() {
        let inputs = SupplyChainInputs {
            manufacturer: "John Deere".into(),
            seed_supplier: "Pioneer Seeds".into(),
            chemical_input: Some(String::new()),
            biochar_supplier: None,
        };
        let suppliers = verify_chain(&inputs);
        assert_eq!(suppliers.len(), 2);
    }

    #[test]
    fn test_alternatives_are_fixed() {
        let alts = alternatives();
        assert_eq!(alts.len(), 2);
        assert_eq!(alts[0].name, "GreenTech Fertilizers");
        assert_eq!(alts[1].name, "EcoGrow Solutions");
        assert!(alts.iter().all(|s| s.verified));
    }

    #[test]
    fn test_supplier_serializes_type_field() {
        let json = serde_json::to_value(&verify_chain(&full_inputs())[0]).unwrap();
        assert_eq!(json["type"], "Manufacturer");
        assert_eq!(json["qualityScore"], 92);
    }
}
