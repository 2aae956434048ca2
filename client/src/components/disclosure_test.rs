use super::*;

#[test]
fn item_class_for_inactive_is_base() {
    assert_eq!(item_class_for("disclosure__item", false), "disclosure__item");
}

#[test]
fn item_class_for_active_adds_modifier() {
    assert_eq!(item_class_for("dropdown-item", true), "dropdown-item dropdown-item--active");
}
