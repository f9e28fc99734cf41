use stockroom_core::{DomainError, PartId, ProductId};
use stockroom_desktop::{App, AppConfig, ProductEditor};
use stockroom_inventory::{PartForm, ProductForm, SourceInput};

fn empty_app() -> App {
    App::new(AppConfig {
        seed_sample_data: false,
        ..AppConfig::default()
    })
}

fn part_form(name: &str, stock: &str) -> PartForm {
    PartForm {
        name: name.to_string(),
        price: "12.50".to_string(),
        stock: stock.to_string(),
        min: "1".to_string(),
        max: "10".to_string(),
        source: SourceInput::Outsourced {
            company_name: "ABC Ltd.".to_string(),
        },
    }
}

fn product_form(name: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        price: "40".to_string(),
        stock: "2".to_string(),
        min: "1".to_string(),
        max: "5".to_string(),
    }
}

#[test]
fn product_lifecycle_from_creation_to_deletion() {
    let mut app = empty_app();

    let hull = app.part_screen().add(&part_form("Hull Plate", "4")).unwrap();
    let engine = app.part_screen().add(&part_form("Ion Engine", "6")).unwrap();

    let mut editor = ProductEditor::new();
    editor.add_part(app.store(), Some(hull)).unwrap();
    editor.add_part(app.store(), Some(engine)).unwrap();
    let err = editor.add_part(app.store(), Some(hull)).unwrap_err();
    assert!(err.is_notice());
    let product_id = editor.save(app.store_mut(), &product_form("X-Wing")).unwrap();
    assert_eq!(product_id, ProductId::new(1));

    // Blocked while associations exist.
    let err = app.main_screen().delete_product(Some(product_id)).unwrap_err();
    assert_eq!(err, DomainError::ProductHasAssociatedParts(product_id));
    assert_eq!(app.store().products().len(), 1);

    let mut editor = ProductEditor::open(app.store(), Some(product_id)).unwrap();
    editor.remove_part(Some(hull)).unwrap();
    editor.remove_part(Some(engine)).unwrap();
    editor.save(app.store_mut(), &product_form("X-Wing")).unwrap();

    let removed = app.main_screen().delete_product(Some(product_id)).unwrap();
    assert_eq!(removed.name(), "X-Wing");
    assert!(app.store().products().is_empty());
}

#[test]
fn deleting_a_part_unlinks_it_everywhere() {
    let mut app = App::new(AppConfig::default());

    app.main_screen().delete_part(Some(PartId::new(2))).unwrap();

    let store = app.store();
    assert!(store.find_part_by_id(PartId::new(2)).is_none());
    for product in store.products() {
        assert!(!product.is_associated(PartId::new(2)));
        assert_eq!(store.associated_parts(product).len(), 1);
    }
}

#[test]
fn validation_errors_surface_in_check_order() {
    let mut app = empty_app();

    let mut form = part_form("", "x");
    assert!(matches!(
        app.part_screen().add(&form).unwrap_err(),
        DomainError::InvalidNumericField { field: "inventory", .. }
    ));

    form.stock = "11".to_string();
    assert_eq!(app.part_screen().add(&form).unwrap_err(), DomainError::EmptyName("name"));

    form.name = "Hull Plate".to_string();
    assert!(matches!(
        app.part_screen().add(&form).unwrap_err(),
        DomainError::InvalidInventory { stock: 11, min: 1, max: 10 }
    ));

    form.stock = "10".to_string();
    assert_eq!(app.part_screen().add(&form).unwrap(), PartId::new(1));
}

#[test]
fn search_is_a_pull_after_each_mutation() {
    let mut app = App::new(AppConfig::default());
    assert_eq!(app.main_screen().search_parts("shield").len(), 2);

    app.part_screen().add(&part_form("Deflector Shield", "3")).unwrap();
    assert_eq!(app.main_screen().search_parts("shield").len(), 3);

    let ids: Vec<PartId> = app.main_screen().search_parts("4").iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![PartId::new(4)]);
}
