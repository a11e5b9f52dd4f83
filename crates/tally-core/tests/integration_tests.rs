//! Integration tests for tally-core
//!
//! These tests exercise the full add → enrich → query workflow through the
//! public API, with a scripted agent backend standing in for the reasoning
//! service.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use tally_core::{
    AgentClient, AgentConfig, DateRange, FilterCriteria, InsightsData, LedgerController,
    MockBackend, MockReply, NewTransaction, TransactionKind,
};

fn new_transaction(
    amount: &str,
    category: &str,
    description: &str,
    date: (i32, u32, u32),
    kind: TransactionKind,
) -> NewTransaction {
    NewTransaction {
        amount: amount.parse().unwrap(),
        category: category.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        kind,
    }
}

fn insights_reply(income: f64, expenses: f64) -> MockReply {
    MockReply::text(format!(
        r#"Analysis follows.
{{"insights_report": {{"summary": {{"total_income": {income}, "total_expenses": {expenses}, "balance": {balance}, "savings_rate": 50.0, "top_spending_categories": [], "monthly_trend": []}}, "insights": ["ok"], "recommendations": ["ok"], "confidence_score": 0.8}}, "metadata": {{"analysis_timestamp": "now", "data_period": "test", "transaction_count": 1}}}}"#,
        income = income,
        expenses = expenses,
        balance = income - expenses,
    ))
}

fn categorization_reply(category: &str) -> MockReply {
    MockReply::text(format!(
        r#"{{"categorization": {{"primary_category": "{}", "confidence_score": 0.9, "alternative_categories": [], "reasoning": "test"}}}}"#,
        category
    ))
}

async fn wait_for_insights(controller: &LedgerController) -> InsightsData {
    for _ in 0..200 {
        if let Some(data) = controller.insights() {
            return data;
        }
        tokio::task::yield_now().await;
    }
    panic!("insights refresh never resolved");
}

#[tokio::test]
async fn test_full_ledger_workflow() {
    let mock = MockBackend::with_script([
        insights_reply(100.0, 0.0),
        insights_reply(100.0, 40.0),
    ]);
    let controller = LedgerController::new(AgentClient::mock(mock), AgentConfig::default());

    controller
        .add(new_transaction(
            "100",
            "Salary",
            "January paycheck",
            (2024, 1, 5),
            TransactionKind::Income,
        ))
        .unwrap();
    controller
        .add(new_transaction(
            "40",
            "Food & Dining",
            "Groceries",
            (2024, 1, 10),
            TransactionKind::Expense,
        ))
        .unwrap();

    let summary = controller.summary();
    assert_eq!(summary.income, dec!(100));
    assert_eq!(summary.expenses, dec!(40));
    assert_eq!(summary.balance, dec!(60));

    let breakdown = controller.category_breakdown();
    assert_eq!(breakdown.len(), 1);
    assert_eq!(breakdown[0].category, "Food & Dining");
    assert_eq!(breakdown[0].amount, dec!(40));

    let trend = controller.monthly_trend();
    assert_eq!(trend.len(), 1);
    assert_eq!(trend[0].month, "Jan");
    assert_eq!(trend[0].income, dec!(100));
    assert_eq!(trend[0].expenses, dec!(40));

    // The add-triggered background refresh lands eventually.
    let insights = wait_for_insights(&controller).await;
    assert!(insights.insights_report.confidence_score > 0.0);
}

#[tokio::test]
async fn test_filtering_composes_with_aggregation() {
    let controller = LedgerController::new(
        AgentClient::mock(MockBackend::with_script([
            insights_reply(0.0, 0.0),
            insights_reply(0.0, 0.0),
            insights_reply(0.0, 0.0),
        ])),
        AgentConfig::default(),
    );

    controller
        .add(new_transaction("1000", "Salary", "Paycheck", (2024, 5, 1), TransactionKind::Income))
        .unwrap();
    controller
        .add(new_transaction("60", "Travel", "Train ticket", (2024, 5, 3), TransactionKind::Expense))
        .unwrap();
    controller
        .add(new_transaction("25", "Travel", "Taxi", (2024, 4, 20), TransactionKind::Expense))
        .unwrap();

    let travel = controller.filtered(&FilterCriteria {
        category: Some("Travel".to_string()),
        kind: Some(TransactionKind::Expense),
        date_range: DateRange::All,
    });
    assert_eq!(travel.len(), 2);
    // Date descending.
    assert_eq!(travel[0].description, "Train ticket");

    let travel_summary = controller.summary_filtered(&FilterCriteria {
        category: Some("Travel".to_string()),
        ..Default::default()
    });
    assert_eq!(travel_summary.expenses, dec!(85));
    assert_eq!(travel_summary.income, dec!(0));
}

#[tokio::test]
async fn test_failed_insights_preserves_previous_report() {
    let controller = LedgerController::new(
        AgentClient::mock(MockBackend::with_script([
            insights_reply(500.0, 0.0),
            MockReply::failure("agent offline"),
        ])),
        AgentConfig::default(),
    );

    controller
        .add(new_transaction("500", "Freelance", "Invoice", (2024, 2, 1), TransactionKind::Income))
        .unwrap();
    let first = wait_for_insights(&controller).await;
    assert_eq!(first.insights_report.summary.total_income, 500.0);

    // Second add triggers a refresh that fails; the held report survives.
    controller
        .add(new_transaction("20", "Other", "Stamps", (2024, 2, 2), TransactionKind::Expense))
        .unwrap();
    for _ in 0..200 {
        tokio::task::yield_now().await;
    }

    let kept = controller.insights().expect("report must survive failure");
    assert_eq!(kept.insights_report.summary.total_income, 500.0);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_suggestions_last_resolved_wins() {
    // "Coffee" issued first, resolves last; "Rent" issued second, resolves
    // first. The retained categorization must be Coffee's.
    let controller = Arc::new(LedgerController::new(
        AgentClient::mock(MockBackend::with_script([
            categorization_reply("Food & Dining").after(Duration::from_millis(80)),
            categorization_reply("Bills & Utilities").after(Duration::from_millis(5)),
        ])),
        AgentConfig::default(),
    ));

    let coffee = {
        let controller = controller.clone();
        tokio::spawn(async move {
            controller
                .suggest_category("Coffee", dec!(4.50), TransactionKind::Expense)
                .await
        })
    };
    tokio::task::yield_now().await;
    let rent = {
        let controller = controller.clone();
        tokio::spawn(async move {
            controller
                .suggest_category("Rent", dec!(1200), TransactionKind::Expense)
                .await
        })
    };

    let (coffee, rent) = tokio::join!(coffee, rent);
    assert_eq!(
        coffee.unwrap().unwrap().categorization.primary_category,
        "Food & Dining"
    );
    assert_eq!(
        rent.unwrap().unwrap().categorization.primary_category,
        "Bills & Utilities"
    );

    assert_eq!(
        controller
            .categorization()
            .unwrap()
            .categorization
            .primary_category,
        "Food & Dining"
    );
}

#[tokio::test]
async fn test_suggestion_survives_ledger_changes() {
    // A suggestion still applies its result after the transaction that
    // prompted it is gone; nothing cancels an in-flight request.
    let controller = LedgerController::new(
        AgentClient::mock(MockBackend::with_script([
            insights_reply(0.0, 9.0),
            categorization_reply("Transportation"),
        ])),
        AgentConfig::default(),
    );

    let created = controller
        .add(new_transaction("9", "Other", "Gas", (2024, 3, 3), TransactionKind::Expense))
        .unwrap();
    wait_for_insights(&controller).await;

    controller.remove(&created.id).unwrap();
    let suggestion = controller
        .suggest_category("Gas", dec!(9), TransactionKind::Expense)
        .await;

    assert!(controller.transactions().is_empty());
    assert_eq!(
        suggestion.unwrap().categorization.primary_category,
        "Transportation"
    );
    assert!(controller.categorization().is_some());
}
