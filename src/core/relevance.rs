use crate::models::{RequestType, SupplyChainRole};

use crate::models::SupplyChainRole::*;

const PROJECT_ROLES: &[SupplyChainRole] = &[
    MaterialSupplier,
    EquipmentVendor,
    FieldService,
    PlumbingAgency,
    ForkliftProvider,
    TruckingProvider,
    Architect,
    BuilderContractor,
];
const SERVICE_ROLES: &[SupplyChainRole] = &[FieldService, PlumbingAgency, Architect];
const RENTAL_ROLES: &[SupplyChainRole] = &[EquipmentVendor, ForkliftProvider, TruckingProvider];
const PART_SUPPLY_ROLES: &[SupplyChainRole] = &[MaterialSupplier];

/// Roles admitted for a request type
pub fn relevant_roles(request_type: RequestType) -> &'static [SupplyChainRole] {
    match request_type {
        RequestType::Project => PROJECT_ROLES,
        RequestType::Service => SERVICE_ROLES,
        RequestType::Rental => RENTAL_ROLES,
        RequestType::PartSupply => PART_SUPPLY_ROLES,
    }
}

/// Hard eligibility cutoff: can this role answer this kind of request at all
#[inline]
pub fn is_role_relevant(request_type: RequestType, role: SupplyChainRole) -> bool {
    relevant_roles(request_type).contains(&role)
}
