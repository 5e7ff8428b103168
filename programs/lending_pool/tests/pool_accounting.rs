use anchor_lang::{error::Error, prelude::Pubkey};
use lending_pool::{error::ErrorCode, InterestRateParams, Pool};
use wad_math::WAD;

/// Token amounts are expressed with 9 decimals.
const UNIT: u64 = 1_000_000_000;

fn units(v: u64) -> u64 {
    v * UNIT
}

/// Parses a decimal string such as "0.012307692307692307" into a WAD value.
fn wad(s: &str) -> u128 {
    let (int, frac) = s.split_once('.').unwrap_or((s, ""));
    let mut frac = frac.to_string();
    while frac.len() < 18 {
        frac.push('0');
    }
    int.parse::<u128>().unwrap() * WAD + frac.parse::<u128>().unwrap()
}

fn pool_with(params: InterestRateParams) -> Pool {
    Pool {
        admin: Pubkey::new_unique(),
        mint: Pubkey::new_unique(),
        liquidity_vault: Pubkey::new_unique(),
        borrow_authority: Pubkey::new_unique(),
        params,
        total_balance: 0,
        total_borrowed: 0,
        total_shares: 0,
        bump: 254,
    }
}

fn params(optimal: &str, base: &str, slope1: &str, slope2: &str) -> InterestRateParams {
    InterestRateParams {
        optimal_utilisation: wad(optimal),
        base_rate: wad(base),
        slope1: wad(slope1),
        slope2: wad(slope2),
    }
}

fn default_pool() -> Pool {
    pool_with(params("0.65", "0", "0.08", "1"))
}

fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(e) => panic!("expected an anchor error, got {e:?}"),
    }
}

fn assert_fails_with<T: std::fmt::Debug>(res: anchor_lang::Result<T>, code: ErrorCode) {
    assert_eq!(error_code(res.unwrap_err()), u32::from(code));
}

#[test]
fn deposits_are_attributed_proportionally() {
    let mut pool = default_pool();
    let lp1 = pool.deposit(units(200)).unwrap();
    let lp2 = pool.deposit(units(400)).unwrap();

    assert_eq!(pool.total_balance, units(600));
    assert_eq!(pool.balance_of(lp1).unwrap(), units(200));
    assert_eq!(pool.balance_of(lp2).unwrap(), units(400));
    assert_eq!(pool.share_of(lp1).unwrap(), 33);
    assert_eq!(pool.share_of(lp2).unwrap(), 66);
}

#[test]
fn later_deposits_do_not_change_earlier_balances() {
    let mut pool = default_pool();
    let lp1 = pool.deposit(units(200)).unwrap();
    assert_eq!(pool.balance_of(lp1).unwrap(), units(200));

    let lp2 = pool.deposit(units(800)).unwrap();
    assert_eq!(pool.balance_of(lp1).unwrap(), units(200));
    assert_eq!(pool.balance_of(lp2).unwrap(), units(800));
}

#[test]
fn share_proportionality_holds_after_interest() {
    let deposits = [137u64, 2_500, 1, 999_999, 42_000];
    let mut pool = default_pool();
    let shares: Vec<u128> = deposits.iter().map(|d| pool.deposit(*d).unwrap()).collect();
    let total: u64 = deposits.iter().sum();

    for (deposit, share) in deposits.iter().zip(&shares) {
        let balance = pool.balance_of(*share).unwrap();
        assert!(deposit.abs_diff(balance) <= 1);
    }

    pool.borrow(total / 2).unwrap();
    pool.repay(total / 2, total / 10).unwrap();
    let grown = pool.total_balance;
    for (deposit, share) in deposits.iter().zip(&shares) {
        let expected = (*deposit as u128 * grown as u128 / total as u128) as u64;
        assert!(expected.abs_diff(pool.balance_of(*share).unwrap()) <= 1);
    }
}

#[test]
fn deposit_then_withdraw_restores_state() {
    let mut pool = default_pool();
    let other = pool.deposit(units(700)).unwrap();
    let before_balance = pool.total_balance;
    let before_shares = pool.total_shares;

    let mut lp = pool.deposit(units(300)).unwrap();
    let burned = pool.withdraw(lp, units(300)).unwrap();
    lp -= burned;

    assert_eq!(lp, 0);
    assert_eq!(pool.total_balance, before_balance);
    assert_eq!(pool.total_shares, before_shares);
    assert_eq!(pool.balance_of(other).unwrap(), units(700));
}

#[test]
fn partial_withdraw_keeps_share_of_pool() {
    let mut pool = default_pool();
    let mut lp1 = pool.deposit(units(500)).unwrap();
    lp1 -= pool.withdraw(lp1, units(200)).unwrap();

    assert_eq!(pool.total_balance, units(300));
    assert_eq!(pool.balance_of(lp1).unwrap(), units(300));
    assert_eq!(pool.share_of(lp1).unwrap(), 100);
}

#[test]
fn withdraw_does_not_touch_other_lps() {
    let mut pool = default_pool();
    let mut lp1 = pool.deposit(units(800)).unwrap();
    let lp2 = pool.deposit(units(700)).unwrap();

    lp1 -= pool.withdraw(lp1, units(450)).unwrap();
    assert_eq!(pool.balance_of(lp1).unwrap(), units(350));
    assert_eq!(pool.balance_of(lp2).unwrap(), units(700));
}

#[test]
fn withdraw_failures() {
    let mut pool = default_pool();
    assert_fails_with(pool.withdraw(0, 0), ErrorCode::InvalidWithdrawAmount);

    let lp1 = pool.deposit(units(400)).unwrap();
    assert_fails_with(pool.withdraw(lp1, units(500)), ErrorCode::AmountExceedsPool);

    pool.deposit(units(400)).unwrap();
    assert_fails_with(pool.withdraw(lp1, units(500)), ErrorCode::InsufficientBalance);

    assert_eq!(pool.total_balance, units(800));
    assert_eq!(pool.balance_of(lp1).unwrap(), units(400));
}

#[test]
fn deposit_rejects_zero() {
    let mut pool = default_pool();
    assert_fails_with(pool.deposit(0), ErrorCode::InvalidDepositAmount);
    assert_eq!(pool.total_shares, 0);
}

#[test]
fn borrow_leaves_total_balance_unchanged() {
    let mut pool = default_pool();
    pool.deposit(units(300)).unwrap();
    assert_fails_with(pool.borrow(0), ErrorCode::InvalidBorrowAmount);

    for amount in [1, units(100), 7] {
        let balance = pool.total_balance;
        let borrowed = pool.total_borrowed;
        pool.borrow(amount).unwrap();
        assert_eq!(pool.total_balance, balance);
        assert_eq!(pool.total_borrowed, borrowed + amount);
    }
}

#[test]
fn repay_arithmetic() {
    let mut pool = default_pool();
    pool.deposit(units(400)).unwrap();
    pool.borrow(units(200)).unwrap();

    let due = pool.repay(units(100), units(20)).unwrap();
    assert_eq!(due, units(120));
    assert_eq!(pool.total_borrowed, units(100));
    assert_eq!(pool.total_balance, units(420));
}

#[test]
fn repay_interest_accrues_to_lps() {
    let mut pool = default_pool();
    let lp = pool.deposit(units(500)).unwrap();
    pool.borrow(units(500)).unwrap();
    assert_eq!(pool.total_balance, units(500));

    pool.repay(units(500), units(20)).unwrap();
    assert_eq!(pool.total_balance, units(520));
    assert_eq!(pool.balance_of(lp).unwrap(), units(520));
}

#[test]
fn repay_failures() {
    let mut pool = default_pool();
    assert_fails_with(pool.repay(0, units(1)), ErrorCode::InvalidRepayAmount);
    assert_fails_with(pool.repay(units(1), 0), ErrorCode::InvalidRepayAmount);

    pool.deposit(units(300)).unwrap();
    pool.borrow(units(200)).unwrap();
    assert_fails_with(pool.repay(units(300), units(10)), ErrorCode::AmountExceedsBorrowed);
    assert_eq!(pool.total_borrowed, units(200));
    assert_eq!(pool.total_balance, units(300));
}

#[test]
fn borrowing_rate_table() {
    // pool size, borrowed, utilisation, rate, optimal, base, slope1, slope2
    let rows = [
        (100, 10, "0.1", "0.012307692307692307", "0.65", "0", "0.08", "1"),
        (100, 10, "0.1", "0.112307692307692307", "0.65", "0.1", "0.08", "1"),
        (100, 65, "0.65", "0.08", "0.65", "0", "0.08", "1"),
        (100, 80, "0.80", "0.508571428571428571", "0.65", "0", "0.08", "1"),
        (100_000, 25_000, "0.25", "0.0125", "0.8", "0", "0.04", "0.75"),
        (100_000, 25_000, "0.25", "0.0625", "0.8", "0.05", "0.04", "0.75"),
        (100_000, 80_000, "0.8", "0.04", "0.8", "0", "0.04", "0.75"),
        (100_000, 90_000, "0.9", "0.415", "0.8", "0", "0.04", "0.75"),
    ];

    for (size, borrowed, utilisation, rate, optimal, base, slope1, slope2) in rows {
        let mut pool = pool_with(params(optimal, base, slope1, slope2));
        assert_eq!(pool.borrowing_rate().unwrap(), wad(base));
        assert_eq!(pool.utilisation_rate().unwrap(), 0);

        pool.deposit(units(size)).unwrap();
        pool.borrow(units(borrowed)).unwrap();

        assert_eq!(pool.utilisation_rate().unwrap(), wad(utilisation), "size {size}");
        assert_eq!(pool.borrowing_rate().unwrap(), wad(rate), "size {size}");
    }
}

#[test]
fn quotes_rate_before_borrowing() {
    let mut pool = default_pool();
    pool.deposit(units(100)).unwrap();

    assert_eq!(
        pool.borrowing_rate_after_loan(units(10)).unwrap(),
        wad("0.012307692307692307")
    );
    assert_eq!(pool.borrowing_rate_after_loan(units(65)).unwrap(), wad("0.08"));
    assert_eq!(
        pool.borrowing_rate_after_loan(units(80)).unwrap(),
        wad("0.508571428571428571")
    );
    assert_eq!(pool.total_borrowed, 0);
}

#[test]
fn rate_is_continuous_at_the_kink() {
    let mut pool = default_pool();
    pool.deposit(units(100)).unwrap();
    pool.borrow(units(65)).unwrap();

    let p = pool.params;
    assert_eq!(pool.borrowing_rate().unwrap(), p.base_rate + p.slope1);
    // one token past the kink moves onto the steeper slope
    assert!(pool.borrowing_rate_after_loan(1).unwrap() > p.base_rate + p.slope1);
}
