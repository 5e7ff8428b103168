use anchor_lang::{error::Error, prelude::Pubkey};
use margin_ledger::{error::ErrorCode, OrderRequest, Position, TraderAccount, MAX_INSTRUMENTS};
use wad_math::WAD;

/// Settlement token with 6 decimals.
const USDC: u64 = 1_000_000;
const MAX_LEVERAGE: u16 = 20;

fn trader() -> TraderAccount {
    TraderAccount {
        owner: Pubkey::new_unique(),
        fill_count: 0,
        positions: Vec::with_capacity(MAX_INSTRUMENTS),
        bump: 253,
    }
}

fn contracts(n: i128) -> i128 {
    n * WAD as i128
}

fn usdc(n: i128) -> i128 {
    n * USDC as i128
}

fn order(instrument: Pubkey, quantity: i128, price: u64, leverage: u16) -> OrderRequest {
    OrderRequest {
        instrument,
        quantity,
        price,
        leverage,
    }
}

fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("expected an anchor error, got {e:?}"),
    }
}

#[test]
fn purchasing_power_caps_accumulated_margin() {
    for (quantity, cost) in [(contracts(2), usdc(-5_000)), (contracts(-2), usdc(5_000))] {
        let mut t = trader();
        let future = Pubkey::new_unique();
        let collateral = 2_000 * USDC;
        let price = 2_500 * USDC;

        let first = t
            .place_order(&order(future, quantity, price, 5), MAX_LEVERAGE, collateral)
            .unwrap();
        assert_eq!(t.fill_count, 1);
        assert_eq!(first.index, 0);
        assert_eq!(first.leverage, 5);
        assert_eq!(first.quantity, quantity);
        assert_eq!(first.cost, cost);
        let position = t.position(&future);
        assert_eq!((position.quantity, position.cost), (quantity, cost));
        assert_eq!(t.required_margin().unwrap(), 1_000 * USDC as u128);

        let second = t
            .place_order(&order(future, quantity, price, 5), MAX_LEVERAGE, collateral)
            .unwrap();
        assert_eq!(t.fill_count, 2);
        assert_eq!(second.index, 1);
        assert_eq!(second.cost, cost);
        let position = t.position(&future);
        assert_eq!(position.quantity, quantity * 2);
        assert_eq!(position.cost, cost * 2);
        assert_eq!(t.required_margin().unwrap(), 2_000 * USDC as u128);

        // (2 + 2 + 2) * 2500 / 5 = 3000 > 2000
        let err = t
            .place_order(&order(future, quantity, price, 5), MAX_LEVERAGE, collateral)
            .unwrap_err();
        assert_eq!(
            error_code(err),
            u32::from(ErrorCode::InsufficientPurchasingPower)
        );
        assert_eq!(t.fill_count, 2);
        assert_eq!(t.position(&future), position);
    }
}

#[test]
fn opposite_orders_reduce_an_existing_position() {
    let cases = [
        (contracts(2), usdc(-5_000), contracts(-1), usdc(2_500)),
        (contracts(-2), usdc(5_000), contracts(1), usdc(-2_500)),
    ];
    for (quantity, cost, quantity2, cost2) in cases {
        let mut t = trader();
        let future = Pubkey::new_unique();
        let collateral = 1_000 * USDC;
        let price = 2_500 * USDC;

        t.place_order(&order(future, quantity, price, 5), MAX_LEVERAGE, collateral)
            .unwrap();
        let margin_before = t.required_margin().unwrap();

        let fill = t
            .place_order(&order(future, quantity2, price, 5), MAX_LEVERAGE, collateral)
            .unwrap();
        assert_eq!(t.fill_count, 2);
        assert_eq!(fill.quantity, quantity2);
        assert_eq!(fill.cost, cost2);

        let position = t.position(&future);
        assert_eq!(position.quantity, quantity / 2);
        assert_eq!(position.cost, cost + cost2);
        assert!(t.required_margin().unwrap() < margin_before);
    }
}

#[test]
fn position_is_the_sum_of_its_fills() {
    let mut t = trader();
    let eth = Pubkey::new_unique();
    let btc = Pubkey::new_unique();
    let collateral = 1_000_000 * USDC;

    let orders = [
        order(eth, contracts(3), 2_400 * USDC, 10),
        order(btc, -contracts(1) / 4, 61_000 * USDC, 4),
        order(eth, -contracts(5), 2_550 * USDC, 10),
        order(btc, contracts(1), 60_500 * USDC, 4),
        order(eth, contracts(7) / 3, 2_499 * USDC, 10),
    ];
    let fills: Vec<_> = orders
        .iter()
        .map(|o| t.place_order(o, MAX_LEVERAGE, collateral).unwrap())
        .collect();

    for instrument in [eth, btc] {
        let (quantity, cost) = fills
            .iter()
            .filter(|f| f.instrument == instrument)
            .fold((0i128, 0i128), |(q, c), f| (q + f.quantity, c + f.cost));
        let position = t.position(&instrument);
        assert_eq!(position.quantity, quantity);
        assert_eq!(position.cost, cost);
    }
    let indexes: Vec<u64> = fills.iter().map(|f| f.index).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3, 4]);
}

#[test]
fn margin_counts_every_instrument() {
    let mut t = trader();
    let eth = Pubkey::new_unique();
    let sol = Pubkey::new_unique();
    let collateral = 1_500 * USDC;

    // 2 * 2500 / 5 = 1000
    t.place_order(&order(eth, contracts(2), 2_500 * USDC, 5), MAX_LEVERAGE, collateral)
        .unwrap();
    // 10 * 150 / 2 = 750, on top of 1000
    let err = t
        .place_order(&order(sol, contracts(10), 150 * USDC, 2), MAX_LEVERAGE, collateral)
        .unwrap_err();
    assert_eq!(
        error_code(err),
        u32::from(ErrorCode::InsufficientPurchasingPower)
    );
    assert_eq!(t.position(&sol), Position::empty(sol));

    // 10 * 150 / 3 = 500 fits exactly
    t.place_order(&order(sol, contracts(10), 150 * USDC, 3), MAX_LEVERAGE, collateral)
        .unwrap();
    assert_eq!(t.required_margin().unwrap(), collateral as u128);
}

#[test]
fn flipping_through_zero_is_judged_on_the_new_size() {
    let mut t = trader();
    let future = Pubkey::new_unique();
    let collateral = 1_000 * USDC;
    let price = 2_500 * USDC;

    t.place_order(&order(future, contracts(2), price, 5), MAX_LEVERAGE, collateral)
        .unwrap();
    // long 2 -> short 2: same size, same margin
    t.place_order(&order(future, contracts(-4), price, 5), MAX_LEVERAGE, collateral)
        .unwrap();
    assert_eq!(t.position(&future).quantity, contracts(-2));

    // short 2 -> long 3 needs 1500
    let err = t
        .place_order(&order(future, contracts(5), price, 5), MAX_LEVERAGE, collateral)
        .unwrap_err();
    assert_eq!(
        error_code(err),
        u32::from(ErrorCode::InsufficientPurchasingPower)
    );
}

#[test]
fn leverage_changes_need_a_flat_position() {
    let mut t = trader();
    let future = Pubkey::new_unique();
    let collateral = 10_000 * USDC;

    t.place_order(&order(future, contracts(1), 100 * USDC, 5), MAX_LEVERAGE, collateral)
        .unwrap();
    let err = t
        .place_order(&order(future, contracts(1), 100 * USDC, 2), MAX_LEVERAGE, collateral)
        .unwrap_err();
    assert_eq!(error_code(err), u32::from(ErrorCode::LeverageMismatch));

    let err = t
        .place_order(&order(future, contracts(1), 100 * USDC, 21), MAX_LEVERAGE, collateral)
        .unwrap_err();
    assert_eq!(error_code(err), u32::from(ErrorCode::LeverageExceeded));
}

#[test]
fn fill_reads_past_the_log_fail() {
    let mut t = trader();
    let err = t.check_fill_index(0).unwrap_err();
    assert_eq!(error_code(err), u32::from(ErrorCode::IndexOutOfRange));

    t.place_order(
        &order(Pubkey::new_unique(), contracts(1), 10 * USDC, 1),
        MAX_LEVERAGE,
        10 * USDC,
    )
    .unwrap();
    t.check_fill_index(0).unwrap();
    let err = t.check_fill_index(1).unwrap_err();
    assert_eq!(error_code(err), u32::from(ErrorCode::IndexOutOfRange));
}
