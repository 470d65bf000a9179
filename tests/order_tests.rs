use pizza_builder::{
    models::{CatalogEntry, Order, PizzaBase, PizzaSize, Topping},
    services::OrderService,
    utils::formatting::format_price,
};

fn assert_price(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_full_selection_flow() {
    let service = OrderService::new();

    let base = service.select::<PizzaBase>("2").unwrap();
    let size = service.select::<PizzaSize>("2").unwrap();
    let toppings = service.parse_toppings("1, 3");
    let order = service.build_order(base, size, &toppings);

    assert_eq!(
        order.description(),
        "Thick Crust Pizza pizza of Medium Size 16\" PizzaSliced fresh tomato, Pepperoni"
    );
    assert_price(order.total_price(), (7.0 + 0.99 + 1.99) * 1.5);
}

#[test]
fn test_blank_topping_input_gives_plain_pizza() {
    let service = OrderService::new();
    let order = service.build_order(PizzaBase::Thin, PizzaSize::Small, &service.parse_toppings(""));

    assert_eq!(format_price(order.total_price(), "$"), "$5.00");
    assert_eq!(
        order.description(),
        "Thin Crust Pizza pizza of Small Size 12\" Pizza.no toppings."
    );
}

#[test]
fn test_malformed_toppings_do_not_abort_order() {
    let service = OrderService::new();
    let toppings = service.parse_toppings("2,x,7,2");
    let order = service.build_order(PizzaBase::Thick, PizzaSize::Medium, &toppings);

    assert_eq!(order.toppings(), &[Topping::Cheese, Topping::Cheese]);
    assert_eq!(format_price(order.total_price(), "$"), "$13.47");
}

#[test]
fn test_every_combination_matches_formula() {
    for base in PizzaBase::all() {
        for size in PizzaSize::all() {
            let mut order = Order::new(*base, *size);
            for topping in Topping::all() {
                order.add_topping(*topping);
            }

            let toppings: f64 = Topping::all().iter().map(|t| t.price()).sum();
            assert_price(order.total_price(), (base.price() + toppings) * size.multiplier());
            assert!(order.description().starts_with(base.description()));
        }
    }
}

#[test]
fn test_summary_serializes_to_json() {
    let mut order = Order::new(PizzaBase::Thin, PizzaSize::Large);
    order.add_topping(Topping::Pepperoni);

    let json = serde_json::to_value(order.summary()).unwrap();

    assert_eq!(json["base"], "Thin");
    assert_eq!(json["size"], "Large");
    assert_eq!(json["toppings"], serde_json::json!(["Pepperoni"]));
    assert_eq!(json["description"], order.description());
}
