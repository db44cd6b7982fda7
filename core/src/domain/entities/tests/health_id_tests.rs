//! Unit tests for health ID formatting

use crate::domain::entities::account::Role;
use crate::domain::entities::health_id::HealthId;

#[test]
fn test_sequence_is_padded_to_two_digits() {
    assert_eq!(HealthId::format(Role::Patient, 1).as_str(), "HL-PNT01");
    assert_eq!(HealthId::format(Role::Doctor, 12).as_str(), "HL-DCT12");
    assert_eq!(HealthId::format(Role::Pharmacist, 123).as_str(), "HL-PHM123");
}

#[test]
fn test_role_is_recovered_from_prefix() {
    assert_eq!(HealthId::format(Role::Doctor, 7).role(), Some(Role::Doctor));
}

#[test]
fn test_looks_like() {
    assert!(HealthId::looks_like("HL-PNT01"));
    assert!(HealthId::looks_like("HL-PHM1234"));
    assert!(!HealthId::looks_like("HL-PNT1"));
    assert!(!HealthId::looks_like("HL-XYZ01"));
    assert!(!HealthId::looks_like("3f1c0b8e-0000-0000-0000-000000000000"));
}
