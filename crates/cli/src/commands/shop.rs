//! Interactive shopping session.
//!
//! Reads one command per line and applies it to a single [`Storefront`], so
//! actions are handled strictly one at a time. Arguments are separated by
//! whitespace; wrap an argument in double quotes to include spaces, e.g.
//! `checkout address="12 Main St"`.
//!
//! A failed command prints its error and the session carries on. Only output
//! errors end the session early.

use std::io::{BufRead, Write};

use beltline_core::Quantity;
use beltline_storefront::checkout::{CheckoutSession, ShippingForm};
use beltline_storefront::error::{AppError, Result};
use beltline_storefront::state::Storefront;
use beltline_storefront::storage::SlotStore;
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::commands::browse::{self, ListArgs};
use crate::commands::wishlist;
use crate::render;

/// Errors splitting an input line into arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated quote")]
    UnterminatedQuote,
}

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct ShopLine {
    #[command(subcommand)]
    command: ShopCommand,
}

#[derive(Debug, Subcommand)]
enum ShopCommand {
    /// Add a product to the cart: add <id> [qty] [size=..] [color=..]
    Add {
        id: String,
        #[arg(allow_hyphen_values = true)]
        options: Vec<String>,
    },
    /// Remove every line of a product from the cart
    Remove { id: String },
    /// Set the quantity of a product in the cart (minimum 1)
    Qty {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Show the cart and order totals
    Cart,
    /// Empty the cart
    Clear,
    /// Save a product to the wishlist, or remove it if already saved
    Wish { id: String },
    /// Show saved products
    Wishlist,
    /// Place the order: checkout email=.. first=.. last=.. address=.. city=.. state=.. zip=.. [country=..]
    Checkout { fields: Vec<String> },
    /// List products with filters
    Products(ListArgs),
    /// Search products by name, description or category
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Show product details
    Show { id: String },
    /// List featured products
    Featured,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Run the session until `quit` or end of input.
///
/// # Errors
///
/// Returns `AppError::Io` if input cannot be read or output cannot be written.
pub fn run<S: SlotStore>(
    input: impl BufRead,
    out: &mut impl Write,
    store: &mut Storefront<S>,
) -> Result<()> {
    writeln!(out, "Beltline shop. Type `help` for commands, `quit` to leave.")?;

    for line in input.lines() {
        let line = line?;
        let tokens = match tokenize(&line) {
            Ok(tokens) if tokens.is_empty() => continue,
            Ok(tokens) => tokens,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        let command = match ShopLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(out, "{e}")?;
                continue;
            }
        };

        match dispatch(out, store, command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    tracing::debug!(cart_items = store.cart().count(), "Shop session ended");
    Ok(())
}

fn dispatch<S: SlotStore>(
    out: &mut impl Write,
    store: &mut Storefront<S>,
    command: ShopCommand,
) -> Result<Flow> {
    match command {
        ShopCommand::Add { id, options } => add(out, store, &id, &options)?,
        ShopCommand::Remove { id } => {
            store.cart_mut().remove_from_cart(&id);
            writeln!(out, "Removed {id} from cart")?;
            cart_status(out, store)?;
        }
        ShopCommand::Qty { id, quantity } => {
            store.cart_mut().update_quantity(&id, quantity);
            cart_status(out, store)?;
        }
        ShopCommand::Cart => {
            render::cart(out, store.cart(), &store.order_summary())?;
        }
        ShopCommand::Clear => {
            store.cart_mut().clear_cart();
            writeln!(out, "Cart cleared")?;
        }
        ShopCommand::Wish { id } => wishlist::toggle(out, store, &id)?,
        ShopCommand::Wishlist => wishlist::list(out, store)?,
        ShopCommand::Checkout { fields } => checkout(out, store, &fields)?,
        ShopCommand::Products(args) => browse::products(out, store, &args)?,
        ShopCommand::Search { query } => browse::search(out, store, &query.join(" "))?,
        ShopCommand::Show { id } => browse::show(out, store, &id)?,
        ShopCommand::Featured => browse::featured(out, store)?,
        ShopCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn add<S: SlotStore>(
    out: &mut impl Write,
    store: &mut Storefront<S>,
    id: &str,
    options: &[String],
) -> Result<()> {
    let mut quantity = Quantity::ONE;
    let mut size = None;
    let mut color = None;

    for option in options {
        match option.split_once('=') {
            Some(("size", value)) => size = Some(value),
            Some(("color", value)) => color = Some(value),
            Some((key, _)) => return Err(AppError::BadRequest(format!("unknown option {key}"))),
            None => {
                let requested: i64 = option
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("invalid quantity {option}")))?;
                if requested < 1 {
                    return Err(AppError::BadRequest(
                        "quantity must be at least 1".to_owned(),
                    ));
                }
                quantity = Quantity::clamped(requested);
            }
        }
    }

    let product = store.add_to_cart_by_id(id, quantity, size, color)?;
    writeln!(out, "Added {quantity} x {} to cart", product.name)?;
    cart_status(out, store)
}

fn cart_status<S: SlotStore>(out: &mut impl Write, store: &Storefront<S>) -> Result<()> {
    writeln!(
        out,
        "Cart: {} items, {}",
        store.cart().count(),
        store.order_summary().subtotal_display()
    )?;
    Ok(())
}

fn checkout<S: SlotStore>(out: &mut impl Write, store: &mut Storefront<S>, fields: &[String]) -> Result<()> {
    let form = shipping_form(fields)?;
    let pricing = *store.pricing();

    let mut session = CheckoutSession::begin(store.cart())?;
    session.submit_shipping(form)?;
    let order = session.place_order(store.cart_mut(), &pricing)?;
    render::confirmation(out, &order)?;
    Ok(())
}

fn shipping_form(fields: &[String]) -> Result<ShippingForm> {
    let mut form = ShippingForm::default();
    for field in fields {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| AppError::BadRequest(format!("expected key=value, got {field}")))?;
        let slot = match key {
            "email" => &mut form.email,
            "first" | "firstName" => &mut form.first_name,
            "last" | "lastName" => &mut form.last_name,
            "address" => &mut form.address,
            "city" => &mut form.city,
            "state" => &mut form.state,
            "zip" => &mut form.zip,
            "country" => &mut form.country,
            other => return Err(AppError::BadRequest(format!("unknown checkout field {other}"))),
        };
        value.clone_into(slot);
    }
    Ok(form)
}

/// Split a line into arguments, honoring double quotes.
///
/// # Errors
///
/// Returns `TokenizeError::UnterminatedQuote` if a quote is left open.
pub fn tokenize(line: &str) -> std::result::Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(TokenizeError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
