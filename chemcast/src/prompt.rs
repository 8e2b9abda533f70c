use color_eyre::eyre::{Result, WrapErr};
use std::str::FromStr;

/// Prompt for interactive keyboard input if given value is [None].
pub fn prompt_if_missing<T: FromStr>(x: Option<T>, prompt: &str) -> Result<T>
where
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match x {
        Some(v) => Ok(v),
        None => {
            let input: String = dialoguer::Input::new()
                .with_prompt(prompt)
                .interact_text()
                .wrap_err_with(|| format!("{} is required", prompt))?;
            T::from_str(&input).wrap_err_with(|| format!("Invalid {}", prompt))
        }
    }
}

/// Same as [prompt_if_missing] but input is hidden as it's typed.
pub fn prompt_if_missing_password(x: Option<String>, prompt: &str) -> Result<String> {
    match x {
        Some(v) => Ok(v),
        None => dialoguer::Password::new()
            .with_prompt(prompt)
            .interact()
            .wrap_err_with(|| format!("{} is required", prompt)),
    }
}
