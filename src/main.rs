fn main() -> Result<(), Box<dyn std::error::Error>> {
    emotion_ai::cli::main()
}
