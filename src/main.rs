//! Persona demo - walks through the validators and the person record builder.
//!
//! Records are printed to stdout; logs go to stderr.

use anyhow::Result;
use persona_validators::validators::{
    all_digits, all_letters, is_alphanumeric, valid_address, valid_age, valid_document_id,
    valid_email, valid_name, valid_phone,
};
use persona_validators::{Config, OutputFormat, PersonBuilder, PersonRecord, RecordResult};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(output = ?config.output, "Starting persona demo");

    show_validators();

    if let Err(e) = show_builder(config.output) {
        error!("Builder demo failed: {}", e);
        return Err(e.into());
    }

    show_failures();

    info!("Persona demo finished");
    Ok(())
}

fn show_validators() {
    println!("=== Validators ===");

    let checks: [(&str, fn(&str) -> bool, &str); 12] = [
        ("all_digits", all_digits, "12345"),
        ("all_digits", all_digits, "abc123"),
        ("all_letters", all_letters, "Juan Pérez"),
        ("is_alphanumeric", is_alphanumeric, "Casa123"),
        ("valid_name", valid_name, "María González"),
        ("valid_name", valid_name, "123"),
        ("valid_age", valid_age, "25"),
        ("valid_age", valid_age, "200"),
        ("valid_document_id", valid_document_id, "12345678"),
        ("valid_email", valid_email, "usuario@ejemplo.com"),
        ("valid_phone", valid_phone, "555-123-4567"),
        ("valid_address", valid_address, "Calle 123 #45"),
    ];

    for (label, check, input) in checks {
        println!("{label}({input:?}) = {}", check(input));
    }
}

fn show_builder(output: OutputFormat) -> RecordResult<()> {
    println!("\n=== Builder ===");

    let mut first = PersonRecord::new();
    first
        .set_name("Juan Carlos Pérez")?
        .set_age(30)?
        .set_document_id("12345678")?
        .set_email("juan.perez@email.com")?
        .set_phone("555-123-4567")?
        .set_address("Avenida Principal 123, Ciudad")?
        .finalize()?;
    print_record("First", &first, output);

    let mut second = PersonBuilder::basic("Ana María Silva", 25)?;
    second.set_email("ana.silva@correo.com")?;
    print_record("Second", &second, output);

    let mut copy = PersonBuilder::copy_from(&first)?;
    copy.set_name("Juan Carlos Pérez Hijo")?;
    print_record("Copy", &copy, output);

    Ok(())
}

fn show_failures() {
    println!("\n=== Expected failures ===");

    let mut record = PersonRecord::new();
    let outcome = record
        .set_name("123 Nombre Inválido")
        .and_then(|r| r.set_age(200))
        .map(|_| ());
    report(outcome, &record);

    let outcome = record
        .set_name("María Válida")
        .and_then(|r| r.set_email("sin_formato"))
        .map(|_| ());
    report(outcome, &record);

    match PersonRecord::new().finalize() {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {e}"),
    }
}

fn report(outcome: RecordResult<()>, record: &PersonRecord) {
    match outcome {
        Ok(()) => println!("unexpected success: {record}"),
        Err(e) => println!("rejected: {e} (record now {record})"),
    }
}

fn print_record(label: &str, record: &PersonRecord, output: OutputFormat) {
    match output {
        OutputFormat::Text => println!("{label}: {record}"),
        OutputFormat::Json => match serde_json::to_string_pretty(&record.all_data()) {
            Ok(json) => println!("{label}:\n{json}"),
            Err(e) => error!("Failed to serialize record: {}", e),
        },
    }
}
