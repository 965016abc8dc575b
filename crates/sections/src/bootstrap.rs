use configgen_core::{GenerationContext, ResolvedConfig, Section, SectionKind};
use configgen_ports::{Result, SectionGenerator};

use crate::script::Script;

const ARGUMENT_PARSER: &str = r#"# Command line
parser = argparse.ArgumentParser(
    description='ABIDES market simulation',
    formatter_class=argparse.ArgumentDefaultsHelpFormatter,
)
parser.add_argument('-c', '--config', required=True,
                    help='Configuration name (matches the file name)')
parser.add_argument('-l', '--log_dir', default=None,
                    help='Log directory (default: timestamped)')
parser.add_argument('-v', '--verbose', action='store_true',
                    help='Verbose simulation output')
parser.add_argument('--log-level', choices=['DEBUG', 'INFO', 'WARNING', 'ERROR'],
                    default='INFO', help='Python logging level')

args, remaining_args = parser.parse_known_args()
log_dir = args.log_dir
"#;

const RUNTIME_SETUP: &str = r#"logging.basicConfig(
    level=getattr(logging, args.log_level.upper()),
    format='%(asctime)s - %(name)s - %(levelname)s - %(message)s',
    datefmt='%Y-%m-%d %H:%M:%S',
)

np.random.seed(seed)
util.silent_mode = not args.verbose

simulation_start_time = dt.datetime.now()

print("=" * 60)
print("ABIDES market simulation starting")
print("=" * 60)
print(f"Start time:    {simulation_start_time.strftime('%Y-%m-%d %H:%M:%S')}")
print(f"Random seed:   {seed}")
print(f"Log directory: {log_dir or 'auto-generated'}")
print(f"Verbose:       {'on' if args.verbose else 'off'}")
print("=" * 60 + "\n")
"#;

/// Argument parsing, seeding, logging setup and the start banner
#[derive(Debug, Default, Clone, Copy)]
pub struct BootstrapSection;

impl SectionGenerator for BootstrapSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Bootstrap
    }

    fn generate(
        &self,
        config: &ResolvedConfig,
        _ctx: &mut GenerationContext,
    ) -> Result<Option<Section>> {
        let seed = config.effective_seed();
        if config.seed().is_none() {
            log::debug!("No seed given, derived {} from generation time", seed);
        }

        let mut script = Script::new(SectionKind::Bootstrap);
        script
            .banner()
            .block(ARGUMENT_PARSER)
            .line(format!("seed = {seed}"))
            .blank()
            .block(RUNTIME_SETUP)
            .blank();

        Ok(Some(script.finish()))
    }
}
