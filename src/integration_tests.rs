#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::app_system::LedgerSystem;
    use crate::domain::{OrderCreate, OrderStatus};
    use crate::ledger::LedgerError;
    use crate::mock_framework::{create_mock_client, expect_dispatch};
    use crate::session::action::{DashboardMetrics, MISSING_FIELDS};
    use crate::session::{Action, Console, View};

    async fn run_script(system: &LedgerSystem, script: &str) -> String {
        let mut console = Console::new(script.as_bytes(), Vec::new(), system.ledger_client.clone(), 10);
        console.run().await.unwrap();
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[tokio::test]
    async fn test_create_manage_and_analyze() {
        let system = LedgerSystem::new(8);

        // create O1, create O2, mark O1 Completed, dashboard, analytics, quit
        let script = "2\nO1\nAlice\nWidget\n2\n9.99\n\
                      2\nO2\nBob\nGadget\n\n5\n\
                      3\n1\n2\n\
                      1\n\
                      4\n\
                      q\n";
        let output = run_script(&system, script).await;

        assert!(output.contains("Order O1 added successfully!"));
        assert!(output.contains("Order O2 added successfully!"));
        assert!(output.contains("Order O1 status updated to Completed!"));
        assert!(output.contains("Total Orders:      2"));
        assert!(output.contains("Pending Orders:    1"));
        assert!(output.contains("Total Revenue:     $14.99"));
        assert!(output.contains("Avg Order Value:   $7.50"));
        assert!(output.ends_with("Goodbye.\n"));

        let orders = system.ledger_client.list_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].status, OrderStatus::Completed);
        assert_eq!(orders[1].quantity, 1);
        assert_eq!(orders[1].price, Decimal::new(5, 0));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_field_leaves_ledger_empty() {
        let system = LedgerSystem::new(8);

        let output = run_script(&system, "2\nO1\n\nWidget\n1\n1.00\nq\n").await;

        assert!(output.contains(MISSING_FIELDS));
        assert!(system.ledger_client.list_orders().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_numbers_are_reasked() {
        let system = LedgerSystem::new(8);

        let script = "2\nO1\nAlice\nWidget\n0\nabc\n3\n-1\n2.505\nq\n";
        let output = run_script(&system, script).await;

        assert!(output.contains("Quantity must be a whole number of at least 1."));
        assert!(output.contains("Price must be a number from 0.00 to 1000000000.00."));

        let orders = system.ledger_client.list_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].quantity, 3);
        assert_eq!(orders[0].price, Decimal::new(250, 2));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_oversized_prices_keep_session_alive() {
        let system = LedgerSystem::new(8);

        let script = "2\nO1\nAlice\nWidget\n1\n79228162514264337593543950335\n1000000000\n\
                      2\nO2\nBob\nGadget\n1\n79228162514264337593543950335\n1000000000\n\
                      4\nq\n";
        let output = run_script(&system, script).await;

        assert!(output.contains("Price must be a number from 0.00 to 1000000000.00."));
        assert!(output.contains("Total Revenue:     $2,000,000,000.00"));
        assert!(output.contains("Avg Order Value:   $1,000,000,000.00"));

        let orders = system.ledger_client.list_orders().await.unwrap();
        assert_eq!(orders.len(), 2);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_ledger_notices() {
        let system = LedgerSystem::new(8);

        let output = run_script(&system, "3\n4\n").await;

        assert!(output.contains("No orders available to manage."));
        assert!(output.contains("No orders to analyze."));
        assert!(output.ends_with("Goodbye.\n"));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_ids_update_first_only() {
        let system = LedgerSystem::new(8);
        let client = system.ledger_client.clone();
        client
            .append(OrderCreate::new("DUP", "Alice", "Widget", 1, Decimal::ONE))
            .await
            .unwrap();
        client
            .append(OrderCreate::new("DUP", "Bob", "Gadget", 1, Decimal::TWO))
            .await
            .unwrap();

        // the selector lists DUP once
        let output = run_script(&system, "3\nDUP\nCanceled\nq\n").await;
        assert!(output.contains("  1) DUP\n"));
        assert!(!output.contains("  2) DUP\n"));

        let orders = client.list_orders().await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::Canceled);
        assert_eq!(orders[1].status, OrderStatus::Pending);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_console_sends_expected_actions() {
        let (client, mut receiver) = create_mock_client(10);

        let console_task = tokio::spawn(async move {
            let script = "1\n2\nO1\nAlice\nWidget\n4\n2.50\nq\n";
            let mut console = Console::new(script.as_bytes(), Vec::new(), client, 10);
            console.run().await?;
            Ok::<_, crate::app_system::SystemError>(String::from_utf8(console.into_writer()).unwrap())
        });

        let (action, responder) = expect_dispatch(&mut receiver).await.expect("Expected dashboard");
        assert_eq!(action, Action::ShowDashboard);
        responder
            .send(Ok(View::Dashboard(DashboardMetrics { total: 7, pending: 3, completed: 4 })))
            .unwrap();

        let (action, responder) = expect_dispatch(&mut receiver).await.expect("Expected submit");
        assert_eq!(
            action,
            Action::SubmitOrder(OrderCreate::new("O1", "Alice", "Widget", 4, Decimal::new(250, 2)))
        );
        responder.send(Ok(View::ValidationFailed("rejected".to_string()))).unwrap();

        let output = console_task.await.unwrap().unwrap();
        assert!(output.contains("Total Orders:      7"));
        assert!(output.contains("Error: rejected"));
    }

    #[tokio::test]
    async fn test_console_surfaces_dead_service() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let mut console = Console::new("1\n".as_bytes(), Vec::new(), client, 10);
        let result = console.run().await;

        assert!(matches!(
            result,
            Err(crate::app_system::SystemError::Ledger(LedgerError::ActorCommunicationError(_)))
        ));
    }
}
