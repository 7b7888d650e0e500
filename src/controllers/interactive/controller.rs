use std::error::Error;
use std::io::{BufRead, Write};

use rand::Rng;

use crate::controllers::interactive::settings::RenderSettings;
use crate::controllers::ports::presenter::GridPresenterPort;
use crate::core::actions::generate_colour_grid::generate_colour_grid::generate_colour_grid;
use crate::core::actions::generate_noise_grid::generate_noise_grid_parallel_rayon::generate_noise_grid_parallel_rayon;
use crate::core::colour::gradient_map::GradientColourMap;
use crate::core::colour::presets::GradientPreset;
use crate::core::data::colour::Colour;
use crate::core::data::gradient_stops::GradientStops;
use crate::core::data::grid_size::GridSize;
use crate::core::data::layer_config::LayerConfig;
use crate::core::noise::open_simplex::OpenSimplexSource;
use crate::input::prompt::{prompt_float, prompt_int, prompt_yes_no};

fn generate_random_seed() -> u32 {
    rand::thread_rng().gen_range(0..=1_000_000)
}

/// Prompt-driven render session: gathers settings, runs the pipeline, and
/// hands the finished grids to the presenter port.
pub struct InteractiveController<R, W, P> {
    input: R,
    output: W,
    presenter: P,
}

impl<R, W, P> InteractiveController<R, W, P>
where
    R: BufRead,
    W: Write,
    P: GridPresenterPort,
{
    pub fn new(input: R, output: W, presenter: P) -> Self {
        Self {
            input,
            output,
            presenter,
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let settings = self.read_settings()?;

        writeln!(self.output, "Seed: {}", settings.seed)?;

        let source = OpenSimplexSource::new(settings.seed);
        let noise = generate_noise_grid_parallel_rayon(
            &source,
            settings.size,
            settings.scale,
            settings.layers,
        )?;

        let mapper = GradientColourMap::new(settings.stops.clone());
        let colours = generate_colour_grid(&noise, &mapper)?;

        self.presenter
            .present(&colours, &noise, settings.show_values)?;

        Ok(())
    }

    fn read_settings(&mut self) -> Result<RenderSettings, Box<dyn Error>> {
        let seed = prompt_int(
            &mut self.input,
            &mut self.output,
            "Enter a seed number (leave blank for a random value): ",
            i64::from(generate_random_seed()),
            Some(0),
            Some(i64::from(u32::MAX)),
        )? as u32;

        let rows = prompt_int(
            &mut self.input,
            &mut self.output,
            "Enter number of rows (default 20): ",
            20,
            Some(1),
            Some(1000),
        )? as usize;

        let columns = prompt_int(
            &mut self.input,
            &mut self.output,
            "Enter number of columns (default 50): ",
            50,
            Some(1),
            Some(1000),
        )? as usize;

        let scale = prompt_float(
            &mut self.input,
            &mut self.output,
            "Enter scale (default 0.1): ",
            0.1,
            Some(0.0),
            Some(10.0),
        )?;

        let octaves = prompt_int(
            &mut self.input,
            &mut self.output,
            "Enter number of octaves (default 1): ",
            1,
            Some(1),
            Some(10),
        )? as u32;

        let persistence = prompt_float(
            &mut self.input,
            &mut self.output,
            "Enter persistence (default 0.5): ",
            0.5,
            Some(0.0),
            Some(1.0),
        )?;

        let lacunarity = prompt_float(
            &mut self.input,
            &mut self.output,
            "Enter lacunarity (default 2.0): ",
            2.0,
            Some(1.0),
            Some(10.0),
        )?;

        let stops = self.read_gradient()?;

        let show_values = prompt_yes_no(
            &mut self.input,
            &mut self.output,
            "Show noise values? (y/N): ",
        )?;

        Ok(RenderSettings {
            seed,
            size: GridSize::new(columns, rows)?,
            scale,
            layers: LayerConfig::new(octaves, persistence, lacunarity)?,
            stops,
            show_values,
        })
    }

    fn read_gradient(&mut self) -> Result<GradientStops, Box<dyn Error>> {
        writeln!(
            self.output,
            "Would you like to use a preset colour gradient or create your own? (default 1)"
        )?;
        writeln!(self.output, "1. Preset")?;
        writeln!(self.output, "2. Custom")?;

        let choice = prompt_int(
            &mut self.input,
            &mut self.output,
            "Enter choice (1-2): ",
            1,
            Some(1),
            Some(2),
        )?;

        if choice == 2 {
            return self.read_custom_gradient();
        }

        writeln!(self.output, "Available presets:")?;

        for (index, preset) in GradientPreset::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, preset)?;
        }

        let pick = prompt_int(
            &mut self.input,
            &mut self.output,
            "Select a preset by number (default 1): ",
            1,
            Some(1),
            Some(GradientPreset::ALL.len() as i64),
        )?;

        Ok(GradientPreset::ALL[(pick - 1) as usize].stops()?)
    }

    fn read_custom_gradient(&mut self) -> Result<GradientStops, Box<dyn Error>> {
        let count = prompt_int(
            &mut self.input,
            &mut self.output,
            "Enter number of gradient points (default 2): ",
            2,
            Some(2),
            None,
        )?;

        let mut stops = Vec::with_capacity(count as usize);

        for point in 1..=count {
            let prompts = ["red", "green", "blue"].map(|channel| {
                format!(
                    "Enter {} value (0-255) of point {}/{}: ",
                    channel, point, count
                )
            });

            let r = prompt_int(
                &mut self.input,
                &mut self.output,
                &prompts[0],
                255,
                Some(0),
                Some(255),
            )? as u8;
            let g = prompt_int(
                &mut self.input,
                &mut self.output,
                &prompts[1],
                255,
                Some(0),
                Some(255),
            )? as u8;
            let b = prompt_int(
                &mut self.input,
                &mut self.output,
                &prompts[2],
                255,
                Some(0),
                Some(255),
            )? as u8;

            writeln!(self.output, "Gradient point {} set.", point)?;
            stops.push(Colour { r, g, b });
        }

        Ok(GradientStops::new(stops)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour_grid::ColourGrid;
    use crate::core::data::noise_grid::NoiseGrid;
    use std::io::{self, Cursor};

    #[derive(Debug, Default)]
    struct StubPresenter {
        presented: Vec<(ColourGrid, NoiseGrid, bool)>,
    }

    impl GridPresenterPort for &mut StubPresenter {
        fn present(
            &mut self,
            colours: &ColourGrid,
            values: &NoiseGrid,
            show_values: bool,
        ) -> io::Result<()> {
            self.presented
                .push((colours.clone(), values.clone(), show_values));

            Ok(())
        }
    }

    fn run_session(script: &str, presenter: &mut StubPresenter) -> Result<(), String> {
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut controller = InteractiveController::new(input, Vec::new(), presenter);

        controller.run().map_err(|e| e.to_string())
    }

    #[test]
    fn test_preset_session_renders_requested_grid() {
        // seed, rows, cols, scale, octaves, persistence, lacunarity,
        // preset-vs-custom, preset number, show values
        let script = "7\n2\n3\n1.0\n2\n0.5\n2.0\n1\n3\nn\n";
        let mut presenter = StubPresenter::default();

        run_session(script, &mut presenter).unwrap();

        assert_eq!(presenter.presented.len(), 1);
        let (colours, values, show_values) = &presenter.presented[0];
        assert_eq!(colours.size().width(), 3);
        assert_eq!(colours.size().height(), 2);
        assert_eq!(values.size(), colours.size());
        assert!(!show_values);
    }

    #[test]
    fn test_identical_sessions_render_identical_grids() {
        let script = "123\n4\n6\n0.3\n3\n0.5\n2.0\n1\n2\n\n";
        let mut first = StubPresenter::default();
        let mut second = StubPresenter::default();

        run_session(script, &mut first).unwrap();
        run_session(script, &mut second).unwrap();

        assert_eq!(first.presented[0].0, second.presented[0].0);
        assert_eq!(first.presented[0].1, second.presented[0].1);
    }

    #[test]
    fn test_custom_gradient_session() {
        // Two custom stops: red and blue
        let script = "9\n2\n2\n0.5\n1\n0.5\n2.0\n2\n2\n255\n0\n0\n0\n0\n255\ny\n";
        let mut presenter = StubPresenter::default();

        run_session(script, &mut presenter).unwrap();

        assert_eq!(presenter.presented.len(), 1);
        assert!(presenter.presented[0].2);
    }

    #[test]
    fn test_empty_input_falls_back_to_defaults() {
        let mut presenter = StubPresenter::default();

        run_session("", &mut presenter).unwrap();

        let (colours, _, show_values) = &presenter.presented[0];
        assert_eq!(colours.size().width(), 50);
        assert_eq!(colours.size().height(), 20);
        assert!(!show_values);
    }

    #[test]
    fn test_show_values_flag_reaches_presenter() {
        let script = "7\n1\n1\n0.1\n1\n0.5\n2.0\n1\n1\ny\n";
        let mut presenter = StubPresenter::default();

        run_session(script, &mut presenter).unwrap();

        assert!(presenter.presented[0].2);
    }
}
