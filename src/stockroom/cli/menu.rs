use super::print::{format_message, render_categories, render_table};
use super::styles::MENU_TITLE;
use std::io::{BufRead, Write};
use stockroom::api::{CmdResult, StockroomApi};
use stockroom::error::Result;
use stockroom::model::{
    parse_price, parse_quantity, ListView, ProductId, ProductUpdate, SearchMode, SortKey,
};
use stockroom::store::DataStore;

const MENU: &str = "
Menu:
1. Add product
2. List products
3. Search products
4. Update product
5. Delete product
6. Quit
";

const LIST_OPTIONS: &str = "
Filter and sort:
1. Filter by category
2. Sort by name
3. Sort by quantity
4. Sort by price
5. Show all products
";

const SEARCH_OPTIONS: &str = "
Search:
1. By ID
2. By part of the name
";

pub(super) fn delete_prompt(name: &str, id: ProductId) -> String {
    format!("Delete product '{}' (ID {})? (y/n)", name, id)
}

/// `y` or `yes`, in any case.
pub(super) fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// The line-based menu. Reads answers from `input` and writes everything to
/// `output`, so a session can be replayed from a script.
pub(super) struct Menu<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut StockroomApi<S>,
    input: R,
    output: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(api: &'a mut StockroomApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Runs until the user quits or input ends. Catalog errors are shown and the
    /// loop continues; only failures to read or write the terminal end it early.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "{}",
            MENU_TITLE.apply_to("Stockroom: product catalog")
        )?;

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.ask("Choose an option: ")? else {
                break;
            };
            match choice.trim() {
                "1" => self.add()?,
                "2" => self.list()?,
                "3" => self.search()?,
                "4" => self.update()?,
                "5" => self.delete()?,
                "6" => {
                    writeln!(self.output, "Bye.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option! Try again.")?,
            }
        }

        Ok(())
    }

    fn add(&mut self) -> Result<()> {
        let Some(name) = self.ask("Product name: ")? else {
            return Ok(());
        };
        let Some(category) = self.ask("Category: ")? else {
            return Ok(());
        };
        let Some(quantity) = self.ask("Quantity in stock: ")? else {
            return Ok(());
        };
        let Some(price) = self.ask("Price: ")? else {
            return Ok(());
        };

        let outcome = parse_quantity(&quantity)
            .and_then(|quantity| parse_price(&price).map(|price| (quantity, price)))
            .and_then(|(quantity, price)| self.api.add_product(&name, &category, quantity, price));
        self.report(outcome)
    }

    fn list(&mut self) -> Result<()> {
        let everything = match self.api.list_products(&ListView::All) {
            Ok(result) => result,
            Err(e) => return self.report(Err(e)),
        };
        if everything.listed_products.is_empty() {
            return self.report(Ok(everything));
        }

        write!(self.output, "{}", LIST_OPTIONS)?;
        let Some(choice) = self.ask("Choose a filter or sort option (1-5): ")? else {
            return Ok(());
        };

        let view = match choice.trim() {
            "1" => {
                match self.api.categories() {
                    Ok(result) => write!(self.output, "{}", render_categories(&result.categories))?,
                    Err(e) => return self.report(Err(e)),
                }
                let Some(category) = self.ask("Category to filter by: ")? else {
                    return Ok(());
                };
                ListView::Category(category)
            }
            "2" => ListView::Sorted(SortKey::Name),
            "3" => ListView::Sorted(SortKey::Quantity),
            "4" => ListView::Sorted(SortKey::Price),
            "5" => ListView::All,
            _ => {
                writeln!(self.output, "Invalid option, showing all products.")?;
                ListView::All
            }
        };

        let outcome = self.api.list_products(&view);
        self.show_listing(outcome)
    }

    fn search(&mut self) -> Result<()> {
        write!(self.output, "{}", SEARCH_OPTIONS)?;
        let Some(choice) = self.ask("Choose an option (1-2): ")? else {
            return Ok(());
        };
        let (mode, prompt) = match choice.trim() {
            "1" => (SearchMode::Id, "Product ID: "),
            "2" => (SearchMode::Name, "Part of the name: "),
            _ => {
                writeln!(self.output, "Invalid option!")?;
                return Ok(());
            }
        };
        let Some(query) = self.ask(prompt)? else {
            return Ok(());
        };

        let outcome = self.api.search_products(mode, &query);
        self.show_listing(outcome)
    }

    fn update(&mut self) -> Result<()> {
        let Some(id) = self.ask_id("ID of the product to update: ")? else {
            return Ok(());
        };
        let current = match self.api.get_product(id) {
            Ok(mut result) => result.listed_products.remove(0),
            Err(e) => return self.report(Err(e)),
        };

        writeln!(
            self.output,
            "Update the fields below. Leave a field blank to keep its value."
        )?;
        let Some(name) = self.ask(&format!("New name (current: {}): ", current.name))? else {
            return Ok(());
        };
        let Some(category) = self.ask(&format!("New category (current: {}): ", current.category))?
        else {
            return Ok(());
        };
        let Some(quantity) = self.ask(&format!("New quantity (current: {}): ", current.quantity))?
        else {
            return Ok(());
        };
        let Some(price) = self.ask(&format!("New price (current: {:.2}): ", current.price))? else {
            return Ok(());
        };

        let update = ProductUpdate::new()
            .with_name(name)
            .with_category(category)
            .with_quantity(quantity)
            .with_price(price);
        let outcome = self.api.update_product(id, &update);
        self.report(outcome)
    }

    fn delete(&mut self) -> Result<()> {
        let Some(id) = self.ask_id("ID of the product to delete: ")? else {
            return Ok(());
        };
        let current = match self.api.get_product(id) {
            Ok(mut result) => result.listed_products.remove(0),
            Err(e) => return self.report(Err(e)),
        };

        let Some(answer) = self.ask(&format!("{}: ", delete_prompt(&current.name, id)))? else {
            return Ok(());
        };
        let outcome = self.api.delete_product(id, is_confirmation(&answer));
        self.report(outcome)
    }

    /// Reads one line. `None` means input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn ask_id(&mut self, prompt: &str) -> Result<Option<ProductId>> {
        let Some(raw) = self.ask(prompt)? else {
            return Ok(None);
        };
        match raw.trim().parse::<ProductId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Invalid ID! Please enter a whole number.")?;
                Ok(None)
            }
        }
    }

    fn show_listing(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) if !result.listed_products.is_empty() => {
                write!(self.output, "\n{}", render_table(&result.listed_products))?;
                Ok(())
            }
            other => self.report(other),
        }
    }

    /// Prints the messages of a finished operation, or the error that stopped it.
    fn report(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => {
                for message in &result.messages {
                    writeln!(self.output, "{}", format_message(message))?;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, kind = ?e.kind(), "menu operation failed");
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use std::io::Cursor;
    use std::path::PathBuf;
    use stockroom::api::StockroomPaths;
    use stockroom::store::memory::InMemoryStore;

    fn api() -> StockroomApi<InMemoryStore> {
        StockroomApi::new(
            InMemoryStore::new(),
            StockroomPaths {
                config_dir: PathBuf::from("unused"),
                data_file: PathBuf::from("products.json"),
            },
        )
    }

    fn session(api: &mut StockroomApi<InMemoryStore>, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(api, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        strip_ansi_codes(&String::from_utf8(output).unwrap()).to_string()
    }

    #[test]
    fn add_list_and_quit() {
        let mut api = api();
        let out = session(
            &mut api,
            "1\nWidget\nTools\n5\n9.99\n1\nGadget\nTools\n10\n19.99\n2\n4\n6\n",
        );

        assert!(out.contains("Product added: Widget (ID 1)"));
        assert!(out.contains("Product added: Gadget (ID 2)"));
        let widget_row = out.find("1     | Widget").unwrap();
        let gadget_row = out.find("2     | Gadget").unwrap();
        assert!(widget_row < gadget_row);
        assert!(out.contains("Bye."));
        assert_eq!(api.store().load().unwrap().len(), 2);
    }

    #[test]
    fn non_numeric_quantity_is_reported_and_menu_continues() {
        let mut api = api();
        let out = session(&mut api, "1\nWidget\nTools\nmany\n9.99\n6\n");

        assert!(out.contains("Error: Invalid quantity"));
        assert!(out.contains("Bye."));
        assert!(api.store().load().unwrap().is_empty());
    }

    #[test]
    fn category_filter_shows_categories_first() {
        let mut api = api();
        api.add_product("Widget", "Tools", 5, 9.99).unwrap();
        api.add_product("Apple", "Produce", 40, 0.5).unwrap();

        let out = session(&mut api, "2\n1\nprod\n6\n");
        assert!(out.contains("Available categories:\n- Tools\n- Produce"));
        assert!(out.contains("| Apple"));
        assert!(!out.contains("| Widget"));
    }

    #[test]
    fn search_by_name() {
        let mut api = api();
        api.add_product("Widget", "Tools", 5, 9.99).unwrap();
        let out = session(&mut api, "3\n2\nWIDG\n3\n1\n7\n6\n");
        assert!(out.contains("1     | Widget"));
        assert!(out.contains("No products found."));
    }

    #[test]
    fn update_keeps_blank_fields_and_warns_on_bad_numbers() {
        let mut api = api();
        api.add_product("Widget", "Tools", 5, 9.99).unwrap();

        let out = session(&mut api, "4\n1\n\nHardware\nlots\n12.5\n6\n");
        assert!(out.contains("New name (current: Widget)"));
        assert!(out.contains("The quantity was not changed."));
        assert!(out.contains("Product updated: Widget (ID 1)"));

        let product = &api.store().load().unwrap()[0];
        assert_eq!(product.name, "Widget");
        assert_eq!(product.category, "Hardware");
        assert_eq!(product.quantity, 5);
        assert_eq!(product.price, 12.5);
    }

    #[test]
    fn delete_requires_yes() {
        let mut api = api();
        api.add_product("Widget", "Tools", 5, 9.99).unwrap();

        let out = session(&mut api, "5\n1\nn\n6\n");
        assert!(out.contains("Delete product 'Widget' (ID 1)? (y/n)"));
        assert!(out.contains("Deletion cancelled."));
        assert_eq!(api.store().load().unwrap().len(), 1);

        let out = session(&mut api, "5\n1\nY\n6\n");
        assert!(out.contains("Product deleted: Widget (ID 1)"));
        assert!(api.store().load().unwrap().is_empty());
    }

    #[test]
    fn unknown_ids_and_bad_input_are_reported() {
        let mut api = api();
        let out = session(&mut api, "4\n9\n5\nabc\n9\n");
        assert!(out.contains("Error: Product not found: 9"));
        assert!(out.contains("Invalid ID!"));
        assert!(out.contains("Invalid option! Try again."));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let mut api = api();
        let out = session(&mut api, "1\nWidget\n");
        assert!(!out.contains("Product added"));
    }

    #[test]
    fn confirmation_answers() {
        assert!(is_confirmation("y"));
        assert!(is_confirmation(" YES "));
        assert!(!is_confirmation("n"));
        assert!(!is_confirmation(""));
    }
}
