use clap::Args;

use dcmpeek::core::TagDictionary;

pub const ABOUT: &str = "Prints the tag dictionary used to name data elements";

#[derive(Args)]
pub struct DictionaryArgs {
  #[arg(
    long,
    help = "Only print entries whose name contains this text. The match is not \
      case sensitive."
  )]
  filter: Option<String>,
}

pub fn run(args: &DictionaryArgs) -> Result<(), ()> {
  use comfy_table::{Attribute, Cell, Table, presets::UTF8_FULL};

  let filter = args.filter.as_ref().map(|filter| filter.to_lowercase());

  let mut table = Table::new();
  table.load_preset(UTF8_FULL);

  table.set_header(
    ["Tag", "Name", "VR"]
      .iter()
      .map(|text| Cell::new(text).add_attribute(Attribute::Bold))
      .collect::<Vec<_>>(),
  );

  for item in TagDictionary::standard().sorted_items() {
    if let Some(filter) = &filter {
      if !item.name.to_lowercase().contains(filter.as_str()) {
        continue;
      }
    }

    table.add_row(vec![
      item.tag.to_string(),
      item.name.to_string(),
      item.vr.to_string(),
    ]);
  }

  println!("{table}");

  Ok(())
}
