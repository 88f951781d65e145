use configuration::{Bounds, Config};
use core_types::{
    CompoundingFrequency, ContributionFrequency, ContributionTiming, DecimalExt, GrowthParameters,
    MortgageParameters, PaymentFrequency,
};
use engine::{CALCULATION_FIELD, Calculator};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn savings_plan() -> GrowthParameters {
    GrowthParameters {
        principal: Decimal::ZERO,
        contribution: dec!(500),
        annual_rate: dec!(7),
        years: Some(30),
        compounding: CompoundingFrequency::Monthly,
        contribution_frequency: ContributionFrequency::Monthly,
        contribution_timing: ContributionTiming::End,
        inflation_rate: Decimal::ZERO,
        tax_rate: Decimal::ZERO,
        ..GrowthParameters::default()
    }
}

fn home_loan() -> MortgageParameters {
    MortgageParameters {
        home_price: dec!(300000),
        down_payment: dec!(60000),
        annual_rate: dec!(6),
        term_years: 30,
        payment_frequency: PaymentFrequency::Monthly,
        ..MortgageParameters::default()
    }
}

#[test]
fn mortgage_worked_example() {
    let outcome = Calculator::new(Config::default())
        .schedule_mortgage(home_loan())
        .unwrap();

    assert_eq!(outcome.summary.loan_amount, dec!(240000));
    assert_eq!(outcome.summary.periodic_payment.round_currency(), dec!(1438.92));
    assert_eq!(outcome.periods.len(), 360);
    assert_eq!(outcome.yearly.len(), 30);

    let total_interest = outcome.summary.total_interest.round_currency();
    assert!((total_interest - dec!(278011.65)).abs() <= dec!(0.05), "{total_interest}");

    let last = outcome.periods.last().unwrap();
    assert_eq!(last.remaining_balance, Decimal::ZERO);
    assert_eq!(outcome.summary.payoff_year, 30);
}

#[test]
fn growth_worked_example() {
    let outcome = Calculator::default().project_growth(savings_plan()).unwrap();

    assert_eq!(outcome.periods.len(), 30);
    assert_eq!(outcome.summary.total_contributed, dec!(180000));
    assert_eq!(outcome.summary.future_value.round_currency(), dec!(609985.50));

    // Contributing at the start of each month earns one more month of interest.
    let beginning = Calculator::default()
        .project_growth(GrowthParameters {
            contribution_timing: ContributionTiming::Beginning,
            ..savings_plan()
        })
        .unwrap();
    assert!(beginning.summary.future_value > outcome.summary.future_value);
}

#[test]
fn down_payment_at_or_above_price_yields_errors_and_no_ledger() {
    let calculator = Calculator::default();
    for down_payment in [dec!(300000), dec!(450000)] {
        let params = MortgageParameters {
            down_payment,
            ..home_loan()
        };
        let errors = calculator.schedule_mortgage(params).unwrap_err();
        assert!(errors.has_field("down_payment"), "{errors}");
    }
}

#[test]
fn every_violation_is_reported_at_once() {
    let params = GrowthParameters {
        principal: dec!(-1),
        annual_rate: dec!(45),
        years: Some(0),
        ..savings_plan()
    };
    let errors = Calculator::default().project_growth(params).unwrap_err();

    assert!(errors.has_field("principal"));
    assert!(errors.has_field("annual_rate"));
    assert!(errors.has_field("years"));
}

#[test]
fn identical_inputs_give_identical_outcomes() {
    let calculator = Calculator::default();

    let first = calculator.project_growth(savings_plan()).unwrap();
    let second = calculator.project_growth(savings_plan()).unwrap();
    assert_eq!(first, second);

    let first = calculator.schedule_mortgage(home_loan()).unwrap();
    let second = calculator.schedule_mortgage(home_loan()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn real_value_never_exceeds_nominal_balance() {
    let params = GrowthParameters {
        inflation_rate: dec!(3),
        tax_rate: dec!(15),
        principal: dec!(10000),
        ..savings_plan()
    };
    let outcome = Calculator::default().project_growth(params).unwrap();

    for year in &outcome.periods {
        assert!(year.real_value <= year.ending_balance);
        assert!(year.after_tax_value <= year.ending_balance);
    }
}

#[test]
fn ancillary_costs_flow_into_the_summary() {
    let params = MortgageParameters {
        property_tax_annual: dec!(3600),
        insurance_annual: dec!(1200),
        hoa_monthly: dec!(50),
        ..home_loan()
    };
    let outcome = Calculator::default().schedule_mortgage(params).unwrap();

    assert_eq!(outcome.summary.monthly_ancillary, dec!(450));
    assert_eq!(outcome.summary.periodic_outlay.round_currency(), dec!(1888.92));
    assert_eq!(
        outcome.summary.total_cost - outcome.summary.total_paid,
        dec!(162000)
    );
}

#[test]
fn outcomes_serialize_for_json_output() {
    let outcome = Calculator::default().schedule_mortgage(home_loan()).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["periods"].as_array().unwrap().len(), 360);
    assert_eq!(json["yearly"].as_array().unwrap().len(), 30);
    assert!(json["summary"]["total_interest"].is_string());
}

#[test]
fn arithmetic_overflow_is_reported_as_a_single_calculation_error() {
    let mut config = Config::default();
    config.growth.principal = Bounds::new(Decimal::ZERO, Decimal::MAX);
    let params = GrowthParameters {
        principal: Decimal::MAX,
        ..savings_plan()
    };

    let errors = Calculator::new(config).project_growth(params).unwrap_err();

    assert_eq!(errors.errors().len(), 1);
    assert_eq!(errors.errors()[0].field, CALCULATION_FIELD);
    assert!(errors.errors()[0].message.contains("Growth projection failed"));
}
