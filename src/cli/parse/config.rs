use std::time::Duration;

use clap::ArgMatches;

use fitch_engine::{
    config::{Config, ConfigOption, SatBackendKind},
    types::err::{ConfigError, ErrorKind},
};

/// Sets an option from a requested value, or describes the bounds of the option.
fn set_option<T: Clone + PartialOrd + std::fmt::Debug>(
    option: &mut ConfigOption<T>,
    request: T,
) -> Result<(), ConfigError> {
    match option.set(request) {
        true => {
            log::info!("{} set to: {:?}", option.name, option.value);
            Ok(())
        }
        false => {
            let (min, max) = option.min_max();
            Err(ConfigError::OutOfBounds {
                option: option.name,
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            })
        }
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, ErrorKind> {
    let mut the_config = Config::default();

    if let Ok(Some(backend)) = args.try_get_one::<SatBackendKind>("backend") {
        set_option(&mut the_config.sat.backend, *backend)?;
    };

    if let Ok(Some(path)) = args.try_get_one::<String>("solver") {
        the_config.sat.solver_path = path.clone();
    };

    if let Ok(Some(seconds)) = args.try_get_one::<f64>("sat_timeout") {
        let (min, max) = the_config.sat.timeout.min_max();
        let Ok(timeout) = Duration::try_from_secs_f64(*seconds) else {
            return Err(ConfigError::OutOfBounds {
                option: the_config.sat.timeout.name,
                min: min.as_secs_f64().to_string(),
                max: max.as_secs_f64().to_string(),
            }
            .into());
        };
        set_option(&mut the_config.sat.timeout, timeout)?;
    };

    if let Ok(Some(iterations)) = args.try_get_one::<usize>("iterations") {
        set_option(&mut the_config.search.iteration_limit, *iterations)?;
    };

    if let Ok(Some(depth)) = args.try_get_one::<usize>("max_depth") {
        set_option(&mut the_config.search.max_depth, *depth)?;
    };

    if args.get_flag("strict") {
        the_config.validation.lenient.value = false;
    };

    Ok(the_config)
}
