//! Defines the route handlers for the page for entering and viewing transactions.

use axum::{
    Form,
    extract::{FromRef, State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::Date;

use crate::{
    AppState, Error, endpoints,
    html::{base, form_group, format_currency},
    timezone::get_local_date,
    transaction::{
        MAX_DESCRIPTION_LENGTH, RawTransaction, Transaction, TransactionId, TransactionStore,
        validate,
    },
};

/// The state needed for the home page.
#[derive(Debug, Clone)]
pub struct HomePageState {
    /// The store holding the transactions to display.
    pub store: TransactionStore,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for HomePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
///
/// Fields are kept as the raw text the user entered so they can be shown
/// again if the form is rejected.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The value of the transaction in dollars.
    #[serde(default)]
    pub amount: String,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
}

impl From<&TransactionForm> for RawTransaction {
    fn from(form: &TransactionForm) -> Self {
        Self {
            amount: Some(Value::String(form.amount.clone())),
            description: Some(Value::String(form.description.clone())),
        }
    }
}

/// A transaction formatted for display.
struct TransactionRow<'a> {
    id: TransactionId,
    description: &'a str,
    date: Date,
    amount: String,
}

/// Renders the page with the transaction form and the list of all transactions.
pub async fn get_home_page(State(state): State<HomePageState>) -> Response {
    match render_home_page(&state, &TransactionForm::default(), None) {
        Ok(page) => page.into_response(),
        Err(error) => error.into_html_response(),
    }
}

/// A route handler for the transaction form, redirects to the home page on success.
///
/// If the form is invalid, the home page is rendered again with the error
/// message and the values the user entered. A body that cannot be read as a
/// form is validated as an empty form.
pub async fn create_transaction_form_endpoint(
    State(state): State<HomePageState>,
    form: Result<Form<TransactionForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("could not read transaction form, using an empty form: {rejection}");
            TransactionForm::default()
        }
    };

    let new_transaction = match validate(&RawTransaction::from(&form)) {
        Ok(new_transaction) => new_transaction,
        Err(error) => {
            tracing::debug!("rejected transaction form: {error}");

            return match render_home_page(&state, &form, Some(&error.to_string())) {
                Ok(page) => (StatusCode::BAD_REQUEST, page).into_response(),
                Err(error) => error.into_html_response(),
            };
        }
    };

    match state.store.append(new_transaction) {
        Ok(transaction) => {
            tracing::info!("created transaction {} from form", transaction.id);
            Redirect::to(endpoints::HOME_VIEW).into_response()
        }
        Err(error) => error.into_html_response(),
    }
}

fn render_home_page(
    state: &HomePageState,
    form: &TransactionForm,
    error_message: Option<&str>,
) -> Result<Markup, Error> {
    let transactions = state.store.list_all()?;
    let rows = transactions
        .iter()
        .map(|transaction| to_row(transaction, &state.local_timezone))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(home_view(form, error_message, &rows))
}

fn to_row<'a>(
    transaction: &'a Transaction,
    local_timezone: &str,
) -> Result<TransactionRow<'a>, Error> {
    let date = get_local_date(local_timezone, transaction.created_at)
        .ok_or_else(|| Error::InvalidTimezone(local_timezone.to_owned()))?;

    Ok(TransactionRow {
        id: transaction.id,
        description: &transaction.description,
        date,
        amount: format_currency(transaction.amount),
    })
}

fn home_view(
    form: &TransactionForm,
    error_message: Option<&str>,
    rows: &[TransactionRow],
) -> Markup {
    let amount_input = html! {
        input
            id="amount"
            name="amount"
            type="number"
            step="0.01"
            min="0.01"
            placeholder="0.00"
            required
            autofocus
            value=(form.amount);
    };

    let description_input = html! {
        input
            id="description"
            name="description"
            type="text"
            placeholder="Enter description"
            maxlength=(MAX_DESCRIPTION_LENGTH)
            required
            value=(form.description);
    };

    let content = html! {
        div class="home"
        {
            h1 { "Transaction Manager" }

            form
                class="transaction-form"
                method="post"
                action=(endpoints::NEW_TRANSACTION_FORM)
            {
                (form_group("amount", "Amount ($)", amount_input))
                (form_group("description", "Description", description_input))

                @if let Some(error_message) = error_message
                {
                    p class="error" { (error_message) }
                }

                button type="submit" { "Add Transaction" }
            }

            section class="transactions-list"
            {
                h2 { "Transactions" }

                @if rows.is_empty()
                {
                    p class="empty-state" { "No transactions yet. Add one above!" }
                }
                @else
                {
                    ul
                    {
                        @for row in rows
                        {
                            li class="transaction-item" data-transaction-id=(row.id)
                            {
                                div class="tx-info"
                                {
                                    span class="tx-description" { (row.description) }
                                    span class="tx-date" { (row.date) }
                                }

                                span class="tx-amount" { (row.amount) }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &content)
}
