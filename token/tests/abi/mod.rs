#![allow(dead_code)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract TestErc20 {
        function name() external view returns (string name);
        function symbol() external view returns (string symbol);
        function decimals() external view returns (uint8 decimals);
        function totalSupply() external view returns (uint256 totalSupply);
        function balanceOf(address account) external view returns (uint256 balance);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256 allowance);
        function approve(address spender, uint256 amount) external returns (bool);
        function transferFrom(address sender, address recipient, uint256 amount) external returns (bool);

        function owner() public view virtual returns (address owner);
        function renounceOwnership() public virtual onlyOwner;
        function transferOwnership(address newOwner) public virtual;

        function mint(address to, uint256 amount) external;
        function burn(address from, uint256 amount) external;
        function burnSelf(uint256 amount) external;
        function batchMint(address[] recipients, uint256[] amounts) external;
        function batchBurn(address[] accounts, uint256[] amounts) external;

        function supportsInterface(bytes4 interfaceId) external view returns (bool supportsInterface);

        error ERC20InsufficientBalance(address sender, uint256 balance, uint256 needed);
        error ERC20InvalidSender(address sender);
        error ERC20InvalidReceiver(address receiver);
        error ERC20InsufficientAllowance(address spender, uint256 allowance, uint256 needed);
        error ERC20InvalidSpender(address spender);
        error ERC20InvalidApprover(address approver);
        error OwnableUnauthorizedAccount(address account);
        error OwnableInvalidOwner(address owner);
        error TestERC20ArrayLengthMismatch(uint256 accounts, uint256 amounts);

        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 value);
        #[derive(Debug, PartialEq)]
        event Approval(address indexed owner, address indexed spender, uint256 value);
        #[derive(Debug, PartialEq)]
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
        #[derive(Debug, PartialEq)]
        event TokensMinted(address indexed operator, address indexed to, uint256 amount);
        #[derive(Debug, PartialEq)]
        event TokensBurned(address indexed operator, address indexed from, uint256 amount);
        #[derive(Debug, PartialEq)]
        event TokensTransferred(address indexed from, address indexed to, uint256 amount);
    }
);
