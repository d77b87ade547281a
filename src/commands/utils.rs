use crate::utils::config::SCHEMA_VERSION;

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Agent Trace Extractor Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string           - Schema version (e.g., '1.0.0')");
        println!("  session_id: string?       - Session id from the response body");
        println!("  user_id: string?          - User id from the response body");
        println!("  entry_count: number       - Trace entries read");
        println!("  result: object            - Recovered pipeline outputs");
        println!("    planningContent: string?        - Planning agent plan");
        println!("    contentCreationContent: string? - Content creation response");
        println!("    optimizationContent: string?    - Last trace entry");
        println!("  summary: object           - Trace breakdown");
        println!("    total_entries: number");
        println!("    function_calls: number");
        println!("    function_responses: number");
        println!("    final_texts: number");
        println!("    calls_by_agent: object     - Calls per agent name");
        println!("    responses_by_agent: object - Responses per agent name");
        println!("  generated_at: string      - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Agent Trace Extractor v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Recovers pipeline outputs from multi-agent orchestration traces.");
}
