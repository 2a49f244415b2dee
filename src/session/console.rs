use std::ops::ControlFlow;
use std::str::FromStr;

use rust_decimal::Decimal;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info, instrument};

use crate::app_system::SystemError;
use crate::clients::LedgerClient;
use crate::domain::{OrderCreate, OrderStatus};
use crate::ledger::MAX_PRICE;
use super::action::{Action, View};
use super::render::render;

const MENU: &str = "\n== Order Management ==\n  1) Dashboard\n  2) Create Order\n  3) Manage Orders\n  4) Analytics\n  q) Quit\n";

/// `Break` means the input stream is exhausted or the user quit.
type Flow = ControlFlow<()>;

/// Menu-driven terminal front end. Holds no order state of its own; every
/// action goes through the ledger client and the returned view is rendered.
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
    client: LedgerClient,
    chart_width: usize,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, out: W, client: LedgerClient, chart_width: usize) -> Self {
        Self {
            lines: reader.lines(),
            out,
            client,
            chart_width,
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Runs the menu loop until the user quits or input ends.
    pub async fn run(&mut self) -> Result<(), SystemError> {
        info!("Console session started");
        loop {
            self.write(MENU).await?;
            let Some(choice) = self.prompt("Select an option: ").await? else {
                break;
            };

            let flow = match choice.to_ascii_lowercase().as_str() {
                "1" | "dashboard" => self.show(Action::ShowDashboard).await?,
                "2" | "create" => self.create_order().await?,
                "3" | "manage" => self.manage_orders().await?,
                "4" | "analytics" => self.show(Action::ShowAnalytics).await?,
                "q" | "quit" | "exit" => ControlFlow::Break(()),
                "" => ControlFlow::Continue(()),
                other => {
                    self.write(&format!("Unknown option: {}\n", other)).await?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                break;
            }
        }
        self.write("Goodbye.\n").await?;
        info!("Console session ended");
        Ok(())
    }

    async fn show(&mut self, action: Action) -> Result<Flow, SystemError> {
        self.dispatch(action).await?;
        Ok(ControlFlow::Continue(()))
    }

    #[instrument(skip(self))]
    async fn dispatch(&mut self, action: Action) -> Result<View, SystemError> {
        let view = self.client.dispatch(action).await?;
        self.write(&render(&view, self.chart_width)).await?;
        Ok(view)
    }

    async fn create_order(&mut self) -> Result<Flow, SystemError> {
        self.write("\n== Create a New Order ==\n").await?;

        let Some(order_id) = self.prompt("Order ID: ").await? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(customer_name) = self.prompt("Customer Name: ").await? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(product) = self.prompt("Product: ").await? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(quantity) = self.read_quantity().await? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(price) = self.read_price().await? else {
            return Ok(ControlFlow::Break(()));
        };

        let params = OrderCreate::new(order_id, customer_name, product, quantity, price);
        self.dispatch(Action::SubmitOrder(params)).await?;
        Ok(ControlFlow::Continue(()))
    }

    async fn manage_orders(&mut self) -> Result<Flow, SystemError> {
        self.write("\n== Manage Orders ==\n").await?;

        let View::Orders { order_ids, .. } = self.dispatch(Action::ShowOrders).await? else {
            return Ok(ControlFlow::Continue(()));
        };

        let mut listing = String::from("\nUpdate Order Status\n");
        for (i, id) in order_ids.iter().enumerate() {
            listing.push_str(&format!("  {}) {}\n", i + 1, id));
        }
        self.write(&listing).await?;

        let order_id = loop {
            let Some(input) = self.prompt("Select Order ID (blank to go back): ").await? else {
                return Ok(ControlFlow::Break(()));
            };
            if input.is_empty() {
                return Ok(ControlFlow::Continue(()));
            }
            match pick(&input, &order_ids) {
                Some(id) => break id.clone(),
                None => self.write("Please choose one of the listed orders.\n").await?,
            }
        };

        let mut choices = String::from("New Status\n");
        for (i, status) in OrderStatus::ALL.iter().enumerate() {
            choices.push_str(&format!("  {}) {}\n", i + 1, status));
        }
        self.write(&choices).await?;

        let status = loop {
            let Some(input) = self.prompt("Select status: ").await? else {
                return Ok(ControlFlow::Break(()));
            };
            let chosen = pick(&input, &OrderStatus::ALL)
                .copied()
                .or_else(|| input.parse().ok());
            match chosen {
                Some(status) => break status,
                None => self.write("Please choose Pending, Completed or Canceled.\n").await?,
            }
        };

        debug!(order_id = %order_id, status = %status, "Submitting status update");
        self.dispatch(Action::UpdateStatus { order_id, status }).await?;
        Ok(ControlFlow::Continue(()))
    }

    /// Integer of at least 1; blank keeps the default of 1.
    async fn read_quantity(&mut self) -> Result<Option<u32>, SystemError> {
        loop {
            let Some(input) = self.prompt("Quantity [1]: ").await? else {
                return Ok(None);
            };
            if input.is_empty() {
                return Ok(Some(1));
            }
            match input.parse::<u32>() {
                Ok(quantity) if quantity >= 1 => return Ok(Some(quantity)),
                _ => self.write("Quantity must be a whole number of at least 1.\n").await?,
            }
        }
    }

    /// Decimal in `0..=MAX_PRICE` rounded to cents; blank keeps the default of 0.00.
    async fn read_price(&mut self) -> Result<Option<Decimal>, SystemError> {
        loop {
            let Some(input) = self.prompt("Price [0.00]: ").await? else {
                return Ok(None);
            };
            if input.is_empty() {
                return Ok(Some(Decimal::ZERO));
            }
            match Decimal::from_str(&input) {
                Ok(price) if price >= Decimal::ZERO && price <= MAX_PRICE => {
                    return Ok(Some(price.round_dp(2)))
                }
                _ => {
                    let message = format!("Price must be a number from 0.00 to {:.2}.\n", MAX_PRICE);
                    self.write(&message).await?
                }
            }
        }
    }

    /// Writes `label` and reads one trimmed line. `None` on end of input.
    async fn prompt(&mut self, label: &str) -> Result<Option<String>, SystemError> {
        self.write(label).await?;
        let line = self.lines.next_line().await?;
        Ok(line.map(|line| line.trim().to_string()))
    }

    async fn write(&mut self, text: &str) -> Result<(), SystemError> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}

/// Resolves a 1-based menu number or an exact entry from `options`.
fn pick<'a, T>(input: &str, options: &'a [T]) -> Option<&'a T>
where
    T: ToString,
{
    if let Ok(n) = input.parse::<usize>() {
        if let Some(option) = n.checked_sub(1).and_then(|i| options.get(i)) {
            return Some(option);
        }
    }
    options.iter().find(|option| option.to_string() == input)
}
