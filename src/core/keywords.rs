use crate::models::SupplyChainRole;

/// Keywords used when a role has no dedicated list
pub const DEFAULT_KEYWORDS: &[&str] = &["construction", "building", "project"];

const MATERIAL_SUPPLIER: &[&str] = &[
    "concrete", "lumber", "steel", "drywall", "insulation", "brick", "sand", "gravel",
    "materials", "supplies",
];
const EQUIPMENT_VENDOR: &[&str] = &[
    "equipment", "machinery", "tools", "generator", "compressor", "lift", "excavator",
];
const FIELD_SERVICE: &[&str] = &[
    "installation", "repair", "maintenance", "service", "on-site", "technical support",
];
const PLUMBING_AGENCY: &[&str] = &[
    "plumbing", "pipes", "water", "drainage", "sewage", "fixtures", "installation",
];
const FORKLIFT_PROVIDER: &[&str] = &[
    "forklift", "material handling", "lifting", "logistics", "warehouse", "loading",
];
const TRUCKING_PROVIDER: &[&str] = &[
    "transportation", "delivery", "hauling", "trucking", "logistics", "freight",
];
const ARCHITECT: &[&str] = &[
    "design", "plans", "blueprint", "architecture", "drawings", "specification", "cad", "bim",
];
const BUILDER_CONTRACTOR: &[&str] = &[
    "construction", "building", "renovation", "project management", "general contractor",
];

/// Lower-cased domain keywords characteristic of a role's work
///
/// Roles without a dedicated list (and an absent role) fall back to
/// [`DEFAULT_KEYWORDS`], so the result is never empty.
pub fn keywords_for_role(role: Option<SupplyChainRole>) -> &'static [&'static str] {
    match role {
        Some(SupplyChainRole::MaterialSupplier) => MATERIAL_SUPPLIER,
        Some(SupplyChainRole::EquipmentVendor) => EQUIPMENT_VENDOR,
        Some(SupplyChainRole::FieldService) => FIELD_SERVICE,
        Some(SupplyChainRole::PlumbingAgency) => PLUMBING_AGENCY,
        Some(SupplyChainRole::ForkliftProvider) => FORKLIFT_PROVIDER,
        Some(SupplyChainRole::TruckingProvider) => TRUCKING_PROVIDER,
        Some(SupplyChainRole::Architect) => ARCHITECT,
        Some(SupplyChainRole::BuilderContractor) => BUILDER_CONTRACTOR,
        Some(SupplyChainRole::ConstructionClient)
        | Some(SupplyChainRole::OperationalTeam)
        | Some(SupplyChainRole::ComplianceTeam)
        | None => DEFAULT_KEYWORDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_keywords() {
        for role in SupplyChainRole::ALL {
            assert!(!keywords_for_role(Some(role)).is_empty(), "{} has no keywords", role);
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for role in SupplyChainRole::ALL {
            for keyword in keywords_for_role(Some(role)) {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_fallback_roles() {
        assert_eq!(keywords_for_role(None), DEFAULT_KEYWORDS);
        assert_eq!(
            keywords_for_role(Some(SupplyChainRole::ComplianceTeam)),
            DEFAULT_KEYWORDS
        );
        assert!(keywords_for_role(Some(SupplyChainRole::MaterialSupplier)).contains(&"steel"));
    }
}
