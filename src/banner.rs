use console::Style;

/// Shown when the faucet command starts.
pub const ONE_WAVE_IMAGE: &str = r#"
                    .-~~-.
            .-~~-.-~      ~-.
    .-~~-.-~      Tidal      ~-.
 ~-~      ~-._          _.-~   ~-.
               ~-.____.-~
"#;

/// Shown when a faucet request has been queued.
pub const TWO_WAVE_IMAGE: &str = r#"
        .-~~-.              .-~~-.
 .-~~-.-~      ~-.   .-~~-.-~      ~-.
~      $TIDE     ~-~      $TIDE      ~-.
  ~-._       _.-~   ~-._        _.-~
      ~-...-~           ~-....-~
"#;

/// Print the faucet splash in the wallet's accent color.
pub fn print_splash() {
    let cyan = Style::new().cyan();
    println!("{}", cyan.apply_to(ONE_WAVE_IMAGE));
}
